//! Domain model types

pub mod profile;
pub mod scenario;

pub use profile::{Frequency, PropertyType, Rotation, ServiceProfile};
pub use scenario::{fixture_scenarios, Scenario};
