//! Infrastructure layer - remote pricing client, scenario loaders

pub mod remote_api;
pub mod scenario_csv;

pub use remote_api::RemoteApiAdapter;
pub use scenario_csv::load_scenarios;
