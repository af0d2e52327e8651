//! Application service layer - config, estimate ports, form controller, demo harness

pub mod app;
pub mod config;
pub mod local_formula;
pub mod ports;
pub mod repository;
