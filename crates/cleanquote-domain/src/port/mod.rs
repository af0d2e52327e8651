//! Pricing port
//!
//! Both estimate paths (the local regression formula and the remote pricing
//! API) sit behind this trait so callers never pick one by accident.

use async_trait::async_trait;
use cleanquote_types::{EstimateError, Quote, QuoteRequest};

/// A source of price quotes
#[async_trait]
pub trait EstimatePort: Send + Sync {
    /// Short identifier for logs and output ("local", "remote")
    fn name(&self) -> &str;

    /// Price the requested job
    async fn quote(&self, request: &QuoteRequest) -> Result<Quote, EstimateError>;
}

#[async_trait]
impl<P: EstimatePort + ?Sized> EstimatePort for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn quote(&self, request: &QuoteRequest) -> Result<Quote, EstimateError> {
        (**self).quote(request).await
    }
}
