//! Demo harness: run the calculator over a list of scenarios and report the
//! derived ratios alongside each estimate

use cleanquote_domain::model::{fixture_scenarios, Scenario};
use cleanquote_domain::service::{estimate, DerivedMetrics};
use cleanquote_types::{EstimateInputs, EstimateResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub inputs: EstimateInputs,
    pub result: EstimateResult,
    pub metrics: DerivedMetrics,
}

pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<ScenarioReport> {
    scenarios
        .iter()
        .map(|scenario| {
            let result = estimate(&scenario.inputs);
            ScenarioReport {
                name: scenario.name.clone(),
                inputs: scenario.inputs,
                result,
                metrics: DerivedMetrics::compute(&scenario.inputs, &result),
            }
        })
        .collect()
}

/// Reports for the built-in scenarios
pub fn run_fixtures() -> Vec<ScenarioReport> {
    run_scenarios(&fixture_scenarios())
}
