//! Domain layer: estimate models, calculator services, and the pricing port

pub mod model;
pub mod port;
pub mod service;
