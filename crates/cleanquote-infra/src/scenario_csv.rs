//! CSV loader for estimate scenarios
//!
//! Expected header (any order). Flag columns that are missing or left blank
//! default to 0:
//! name,sqft,type_house,freq_qws,freq_w,rot_1,rot_4,rot_a,rot_p,rot_2

use std::path::Path;

use cleanquote_domain::model::Scenario;
use cleanquote_types::{EstimateInputs, Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(default)]
    name: Option<String>,
    sqft: f64,
    #[serde(default)]
    type_house: Option<f64>,
    #[serde(default)]
    freq_qws: Option<f64>,
    #[serde(default)]
    freq_w: Option<f64>,
    #[serde(default)]
    rot_1: Option<f64>,
    #[serde(default)]
    rot_4: Option<f64>,
    #[serde(default)]
    rot_a: Option<f64>,
    #[serde(default)]
    rot_p: Option<f64>,
    #[serde(default)]
    rot_2: Option<f64>,
}

impl ScenarioRow {
    fn into_scenario(self, row_num: usize) -> Scenario {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("scenario-{}", row_num));

        Scenario::new(
            name,
            EstimateInputs {
                sqft: self.sqft,
                type_house: self.type_house.unwrap_or(0.0),
                freq_qws: self.freq_qws.unwrap_or(0.0),
                freq_w: self.freq_w.unwrap_or(0.0),
                rot_1: self.rot_1.unwrap_or(0.0),
                rot_4: self.rot_4.unwrap_or(0.0),
                rot_a: self.rot_a.unwrap_or(0.0),
                rot_p: self.rot_p.unwrap_or(0.0),
                rot_2: self.rot_2.unwrap_or(0.0),
            },
        )
    }
}

/// Load scenarios from a CSV file with a header row
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    parse_scenarios(reader, &path.display().to_string())
}

fn parse_scenarios<R: std::io::Read>(mut reader: csv::Reader<R>, origin: &str) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();
    for (row_idx, row) in reader.deserialize::<ScenarioRow>().enumerate() {
        let row = row?;
        scenarios.push(row.into_scenario(row_idx + 1));
    }

    if scenarios.is_empty() {
        return Err(Error::InvalidScenario(format!("no scenarios in {}", origin)));
    }

    tracing::debug!(count = scenarios.len(), origin, "loaded scenarios");
    Ok(scenarios)
}
