//! Estimate form controller
//!
//! Drives a single quote submission through
//! `Idle -> Submitting -> Success | Error`, with `reset` returning to `Idle`.
//! A second submit while one is in flight is refused, which is what the
//! disabled submit button does in the dashboard.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use cleanquote_domain::port::EstimatePort;
use cleanquote_domain::service::{validate_inputs, ValidationPolicy};
use cleanquote_types::{EstimateError, Quote, QuoteRequest};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FormState {
    Idle,
    Submitting,
    Success { quote: Quote },
    Error { message: String, kind: String },
}

impl FormState {
    fn failed(err: &EstimateError) -> Self {
        FormState::Error {
            message: err.user_message().to_string(),
            kind: err.kind().to_string(),
        }
    }

    fn from_outcome(outcome: &Result<Quote, EstimateError>) -> Self {
        match outcome {
            Ok(quote) => FormState::Success {
                quote: quote.clone(),
            },
            Err(e) => FormState::failed(e),
        }
    }
}

pub struct EstimateFormController<P> {
    port: P,
    state: Mutex<FormState>,
    timeout: Duration,
    policy: ValidationPolicy,
}

/// Puts the form back to `Idle` if a submission is dropped mid-flight
struct InFlight<'a> {
    state: &'a Mutex<FormState>,
    finished: bool,
}

impl InFlight<'_> {
    fn finish(mut self, next: FormState) {
        *lock(self.state) = next;
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("estimate submission cancelled");
            *lock(self.state) = FormState::Idle;
        }
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    // Never held across an await; a poisoned lock still holds a valid state.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<P: EstimatePort> EstimateFormController<P> {
    pub fn new(port: P, timeout: Duration) -> Self {
        Self {
            port,
            state: Mutex::new(FormState::Idle),
            timeout,
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> FormState {
        lock(&self.state).clone()
    }

    pub fn is_submit_enabled(&self) -> bool {
        *lock(&self.state) != FormState::Submitting
    }

    /// Return to `Idle` so the user can try again. Ignored while submitting.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        if *state != FormState::Submitting {
            *state = FormState::Idle;
        }
    }

    /// Submit `request` to the port, bounded by the controller timeout
    pub async fn submit(&self, request: &QuoteRequest) -> Result<Quote, EstimateError> {
        {
            let mut state = lock(&self.state);
            if *state == FormState::Submitting {
                return Err(EstimateError::Busy);
            }
            if let Err(e) = validate_inputs(&request.inputs, self.policy) {
                *state = FormState::failed(&e);
                return Err(e);
            }
            *state = FormState::Submitting;
        }

        let in_flight = InFlight {
            state: &self.state,
            finished: false,
        };

        let outcome = match tokio::time::timeout(self.timeout, self.port.quote(request)).await {
            Ok(result) => result,
            Err(_) => Err(EstimateError::Timeout(self.timeout)),
        };

        match &outcome {
            Ok(quote) => tracing::info!(
                port = self.port.name(),
                price = quote.price_dollars,
                source = %quote.source,
                "estimate succeeded"
            ),
            Err(e) => tracing::warn!(port = self.port.name(), kind = e.kind(), error = %e, "estimate failed"),
        }

        in_flight.finish(FormState::from_outcome(&outcome));
        outcome
    }
}
