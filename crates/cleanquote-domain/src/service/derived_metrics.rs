//! Ratios shown alongside an estimate

use cleanquote_types::{EstimateInputs, EstimateResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// `price / hours`, None when the predicted time is zero
    pub price_per_hour: Option<f64>,
    /// `price / sqft`, None when the square footage is zero
    pub price_per_sqft: Option<f64>,
}

impl DerivedMetrics {
    pub fn compute(inputs: &EstimateInputs, result: &EstimateResult) -> Self {
        Self {
            price_per_hour: ratio(result.price_dollars, result.cleaning_time_hours),
            price_per_sqft: ratio(result.price_dollars, inputs.sqft),
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
