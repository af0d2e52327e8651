//! Optional checks on the categorical structure of the inputs
//!
//! The calculator accepts any vector. Whether multiple rotation or frequency
//! flags may be set at once is a product decision, so callers opt in.

use clap::ValueEnum;
use cleanquote_types::{EstimateError, EstimateInputs};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Compute whatever the inputs are
    #[default]
    AcceptAndCompute,
    /// Reject negative sqft, non-binary flags, and overlapping categories
    Strict,
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::AcceptAndCompute => write!(f, "accept-and-compute"),
            ValidationPolicy::Strict => write!(f, "strict"),
        }
    }
}

const FLAG_NAMES: [&str; 8] = [
    "type_house", "freq_qws", "freq_w", "rot_1", "rot_4", "rot_a", "rot_p", "rot_2",
];

/// List every problem with `inputs`. Empty means valid.
pub fn violations(inputs: &EstimateInputs) -> Vec<String> {
    let mut problems = Vec::new();

    if !inputs.sqft.is_finite() {
        problems.push("sqft must be a finite number".to_string());
    } else if inputs.sqft < 0.0 {
        problems.push(format!("sqft must be >= 0 (got {})", inputs.sqft));
    }

    let flags = [
        inputs.type_house,
        inputs.freq_qws,
        inputs.freq_w,
        inputs.rot_1,
        inputs.rot_4,
        inputs.rot_a,
        inputs.rot_p,
        inputs.rot_2,
    ];
    for (name, value) in FLAG_NAMES.iter().zip(flags) {
        if value != 0.0 && value != 1.0 {
            problems.push(format!("{} must be 0 or 1 (got {})", name, value));
        }
    }

    let frequencies = inputs.frequency_flags().iter().filter(|&&f| f != 0.0).count();
    if frequencies > 1 {
        problems.push("at most one frequency flag may be set".to_string());
    }

    let rotations = inputs.rotation_flags().iter().filter(|&&r| r != 0.0).count();
    if rotations > 1 {
        problems.push("at most one rotation flag may be set".to_string());
    }

    problems
}

/// Apply `policy` to `inputs`
pub fn validate_inputs(
    inputs: &EstimateInputs,
    policy: ValidationPolicy,
) -> Result<(), EstimateError> {
    match policy {
        ValidationPolicy::AcceptAndCompute => Ok(()),
        ValidationPolicy::Strict => {
            let problems = violations(inputs);
            if problems.is_empty() {
                Ok(())
            } else {
                Err(EstimateError::InvalidInputs(problems))
            }
        }
    }
}
