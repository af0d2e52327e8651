//! Cleaning time and price estimation
//!
//! Two fixed linear regression models over the same predictor vector:
//!
//! ```text
//! hours = 0.5165 + 0.000352 sqft + 0.0882 house + 0.1557 qws + 0.0161 w
//!         - 0.0478 rot_1 + 0.0051 rot_4 + 0.1234 rot_a + 0.0401 rot_p + 0.1763 rot_2
//! price = 114.87 + 0.0343 sqft + 10.38 house + 12.71 qws + 6.84 w
//!         - 5.79 rot_1 + 2.73 rot_4 + 17.09 rot_a + 7.15 rot_p + 16.34 rot_2
//! ```
//!
//! Inputs are never clamped or validated here. See `validation` for the
//! optional categorical checks.

use cleanquote_types::{EstimateInputs, EstimateResult};

/// A linear model with a fixed rounding precision.
///
/// Coefficients follow the predictor order of [`predictors`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: [f64; 9],
    pub decimals: i32,
}

pub const TIME_MODEL: LinearModel = LinearModel {
    intercept: 0.5165,
    coefficients: [
        0.000352, 0.0882, 0.1557, 0.0161, -0.0478, 0.0051, 0.1234, 0.0401, 0.1763,
    ],
    decimals: 2,
};

pub const PRICE_MODEL: LinearModel = LinearModel {
    intercept: 114.87,
    coefficients: [
        0.0343, 10.38, 12.71, 6.84, -5.79, 2.73, 17.09, 7.15, 16.34,
    ],
    decimals: 0,
};

/// Predictor vector: sqft, type_house, freq_qws, freq_w, rot_1, rot_4, rot_a, rot_p, rot_2
pub fn predictors(inputs: &EstimateInputs) -> [f64; 9] {
    [
        inputs.sqft,
        inputs.type_house,
        inputs.freq_qws,
        inputs.freq_w,
        inputs.rot_1,
        inputs.rot_4,
        inputs.rot_a,
        inputs.rot_p,
        inputs.rot_2,
    ]
}

impl LinearModel {
    /// Unrounded prediction. Terms are summed left to right so the result is
    /// bit-for-bit reproducible.
    pub fn raw(&self, inputs: &EstimateInputs) -> f64 {
        self.coefficients
            .iter()
            .zip(predictors(inputs))
            .fold(self.intercept, |acc, (coef, x)| acc + coef * x)
    }

    pub fn predict(&self, inputs: &EstimateInputs) -> f64 {
        round_half_away(self.raw(inputs), self.decimals)
    }
}

/// Round to `decimals` places, ties away from zero
pub fn round_half_away(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Predicted cleaning duration in hours (2 decimals)
pub fn compute_cleaning_time_hours(inputs: &EstimateInputs) -> f64 {
    TIME_MODEL.predict(inputs)
}

/// Predicted price in whole dollars
pub fn compute_cleaning_price_dollars(inputs: &EstimateInputs) -> f64 {
    PRICE_MODEL.predict(inputs)
}

/// Both predictions at once
pub fn estimate(inputs: &EstimateInputs) -> EstimateResult {
    EstimateResult {
        cleaning_time_hours: compute_cleaning_time_hours(inputs),
        price_dollars: compute_cleaning_price_dollars(inputs),
    }
}
