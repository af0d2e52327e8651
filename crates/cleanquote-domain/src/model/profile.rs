//! Typed service profile mapped onto the model's dummy variables

use clap::ValueEnum;
use cleanquote_types::EstimateInputs;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Single-family house
    House,
    /// Apartment or condo
    #[default]
    Apartment,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
        }
    }
}

/// Service cadence. No frequency flag set is the baseline cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Quad-weekly / semi-monthly (freq_qws)
    #[value(name = "qws")]
    QuadWeekly,
    /// Weekly (freq_w)
    Weekly,
}

/// Rotation category of the recurring task list
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Rotation {
    #[value(name = "1")]
    #[serde(rename = "1")]
    One,
    #[value(name = "4")]
    #[serde(rename = "4")]
    Four,
    #[value(name = "a")]
    #[serde(rename = "a")]
    A,
    #[value(name = "p")]
    #[serde(rename = "p")]
    P,
    #[value(name = "2")]
    #[serde(rename = "2")]
    Two,
}

/// What the estimate form captures before it becomes a predictor vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceProfile {
    pub sqft: f64,
    pub property: PropertyType,
    pub frequency: Option<Frequency>,
    pub rotation: Option<Rotation>,
}

impl ServiceProfile {
    pub fn new(sqft: f64, property: PropertyType) -> Self {
        Self {
            sqft,
            property,
            frequency: None,
            rotation: None,
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Build the predictor vector. At most one frequency flag and one
    /// rotation flag are set.
    pub fn to_inputs(&self) -> EstimateInputs {
        let flag = |on: bool| if on { 1.0 } else { 0.0 };

        EstimateInputs {
            sqft: self.sqft,
            type_house: flag(self.property == PropertyType::House),
            freq_qws: flag(self.frequency == Some(Frequency::QuadWeekly)),
            freq_w: flag(self.frequency == Some(Frequency::Weekly)),
            rot_1: flag(self.rotation == Some(Rotation::One)),
            rot_4: flag(self.rotation == Some(Rotation::Four)),
            rot_a: flag(self.rotation == Some(Rotation::A)),
            rot_p: flag(self.rotation == Some(Rotation::P)),
            rot_2: flag(self.rotation == Some(Rotation::Two)),
        }
    }
}

impl From<ServiceProfile> for EstimateInputs {
    fn from(profile: ServiceProfile) -> Self {
        profile.to_inputs()
    }
}
