//! Core records for cleaning job estimation

use serde::{Deserialize, Serialize};

/// Predictor variables for the time and price models.
///
/// Flags are carried as numbers rather than booleans: the models treat them as
/// dummy variables and any value, in range or not, flows through the
/// arithmetic unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateInputs {
    /// Property square footage
    pub sqft: f64,
    /// 1 = single-family house, 0 = apartment/condo
    pub type_house: f64,
    /// Quad-weekly / semi-monthly frequency
    pub freq_qws: f64,
    /// Weekly frequency
    pub freq_w: f64,
    pub rot_1: f64,
    pub rot_4: f64,
    pub rot_a: f64,
    pub rot_p: f64,
    pub rot_2: f64,
}

impl EstimateInputs {
    /// Inputs with only the square footage set
    pub fn with_sqft(sqft: f64) -> Self {
        Self {
            sqft,
            ..Default::default()
        }
    }

    /// Rotation flags in model order: rot_1, rot_4, rot_a, rot_p, rot_2
    pub fn rotation_flags(&self) -> [f64; 5] {
        [self.rot_1, self.rot_4, self.rot_a, self.rot_p, self.rot_2]
    }

    /// Frequency flags in model order: freq_qws, freq_w
    pub fn frequency_flags(&self) -> [f64; 2] {
        [self.freq_qws, self.freq_w]
    }
}

/// Predicted duration and price for a cleaning job
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Cleaning time in hours, rounded to 2 decimals
    pub cleaning_time_hours: f64,
    /// Price in whole dollars
    pub price_dollars: f64,
}

fn default_cleaning_type() -> String {
    "standard".to_string()
}

/// A request for a price quote, as captured by the estimate form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub inputs: EstimateInputs,

    /// Service address, required by the remote pricing API
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default = "default_cleaning_type")]
    pub cleaning_type: String,
}

impl QuoteRequest {
    pub fn new(inputs: EstimateInputs) -> Self {
        Self {
            inputs,
            address: None,
            cleaning_type: default_cleaning_type(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_cleaning_type(mut self, cleaning_type: impl Into<String>) -> Self {
        self.cleaning_type = cleaning_type.into();
        self
    }
}

/// A price quote returned by an estimate source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price_dollars: f64,

    /// Only the local formula predicts a duration
    #[serde(default)]
    pub cleaning_time_hours: Option<f64>,

    pub square_footage: f64,

    /// Which pricing path produced the quote (e.g. "formula")
    pub source: String,
}
