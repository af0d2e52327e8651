//! Estimate port backed by the in-process regression formula

use async_trait::async_trait;
use cleanquote_domain::port::EstimatePort;
use cleanquote_domain::service::{estimate, validate_inputs, ValidationPolicy};
use cleanquote_types::{EstimateError, Quote, QuoteRequest};

pub const FORMULA_SOURCE: &str = "formula";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFormulaAdapter {
    policy: ValidationPolicy,
}

impl LocalFormulaAdapter {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Synchronous form of [`EstimatePort::quote`]
    pub fn quote_now(&self, request: &QuoteRequest) -> Result<Quote, EstimateError> {
        validate_inputs(&request.inputs, self.policy)?;
        let result = estimate(&request.inputs);

        Ok(Quote {
            price_dollars: result.price_dollars,
            cleaning_time_hours: Some(result.cleaning_time_hours),
            square_footage: request.inputs.sqft,
            source: FORMULA_SOURCE.to_string(),
        })
    }
}

#[async_trait]
impl EstimatePort for LocalFormulaAdapter {
    fn name(&self) -> &str {
        "local"
    }

    async fn quote(&self, request: &QuoteRequest) -> Result<Quote, EstimateError> {
        self.quote_now(request)
    }
}
