//! Domain services

pub mod derived_metrics;
pub mod estimate_calculator;
pub mod validation;

pub use derived_metrics::DerivedMetrics;
pub use estimate_calculator::{
    compute_cleaning_price_dollars, compute_cleaning_time_hours, estimate, round_half_away,
};
pub use validation::{validate_inputs, ValidationPolicy};
