//! Error types for cleanquote

use std::time::Duration;
use thiserror::Error;

/// Message shown to the user for any failed quote request
pub const QUOTE_FAILED_MESSAGE: &str = "Request failed. Please try again.";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// UI state store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    Io(String),

    #[error("Store data corrupted: {0}")]
    Corrupted(String),
}

/// Errors from an estimate source (local formula or remote pricing API)
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Estimate request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Estimate server rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    #[error("Invalid estimate response: {0}")]
    InvalidResponse(String),

    #[error("Invalid estimate inputs: {}", .0.join("; "))]
    InvalidInputs(Vec<String>),

    #[error("An estimate request is already in flight")]
    Busy,
}

impl EstimateError {
    /// Uniform message for display, regardless of the failure kind
    pub fn user_message(&self) -> &'static str {
        QUOTE_FAILED_MESSAGE
    }

    /// Short machine-readable kind, used in logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            EstimateError::Network(_) => "network_error",
            EstimateError::Timeout(_) => "timeout",
            EstimateError::ServerRejected { .. } => "server_rejected",
            EstimateError::InvalidResponse(_) => "invalid_response",
            EstimateError::InvalidInputs(_) => "invalid_inputs",
            EstimateError::Busy => "busy",
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Estimate error: {0}")]
    Estimate(#[from] EstimateError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

pub type Result<T> = std::result::Result<T, Error>;
