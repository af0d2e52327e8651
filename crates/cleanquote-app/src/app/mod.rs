//! Use cases built on the estimate port

pub mod contract;
pub mod demo_harness;
pub mod form_controller;

pub use contract::{check_agreement, ContractReport, PriceAgreement};
pub use demo_harness::{run_fixtures, run_scenarios, ScenarioReport};
pub use form_controller::{EstimateFormController, FormState};
