//! Named input vectors for the demo harness

use cleanquote_types::EstimateInputs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub inputs: EstimateInputs,
}

impl Scenario {
    pub fn new(name: impl Into<String>, inputs: EstimateInputs) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

/// The five built-in demo scenarios
pub fn fixture_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "house-semimonthly-rot1",
            EstimateInputs {
                sqft: 1500.0,
                type_house: 1.0,
                freq_qws: 1.0,
                rot_1: 1.0,
                ..Default::default()
            },
        ),
        Scenario::new(
            "condo-weekly-rot2",
            EstimateInputs {
                sqft: 850.0,
                freq_w: 1.0,
                rot_2: 1.0,
                ..Default::default()
            },
        ),
        Scenario::new(
            "large-house-rota",
            EstimateInputs {
                sqft: 2400.0,
                type_house: 1.0,
                rot_a: 1.0,
                ..Default::default()
            },
        ),
        Scenario::new(
            "condo-semimonthly-rot4",
            EstimateInputs {
                sqft: 1200.0,
                freq_qws: 1.0,
                rot_4: 1.0,
                ..Default::default()
            },
        ),
        Scenario::new(
            "estate-weekly-rotp",
            EstimateInputs {
                sqft: 3200.0,
                type_house: 1.0,
                freq_w: 1.0,
                rot_p: 1.0,
                ..Default::default()
            },
        ),
    ]
}
