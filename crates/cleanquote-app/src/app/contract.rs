//! Agreement check between two estimate ports
//!
//! The dashboard has two pricing paths: the regression formula and the
//! backend endpoint. This runs the same requests through both and reports
//! where their prices diverge by more than a relative tolerance.

use cleanquote_domain::port::EstimatePort;
use cleanquote_types::{EstimateError, Quote, QuoteRequest};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceAgreement {
    pub name: String,
    pub baseline_price: Option<f64>,
    pub candidate_price: Option<f64>,
    /// |candidate - baseline| / baseline, in percent
    pub delta_pct: Option<f64>,
    pub within_tolerance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractReport {
    pub baseline: String,
    pub candidate: String,
    pub tolerance_pct: f64,
    pub rows: Vec<PriceAgreement>,
}

impl ContractReport {
    pub fn all_agree(&self) -> bool {
        self.rows.iter().all(|row| row.within_tolerance)
    }

    pub fn disagreements(&self) -> usize {
        self.rows.iter().filter(|row| !row.within_tolerance).count()
    }
}

/// Relative price difference in percent
pub fn delta_pct(baseline: f64, candidate: f64) -> f64 {
    if baseline == 0.0 {
        if candidate == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((candidate - baseline) / baseline).abs() * 100.0
    }
}

fn price_or_error(
    port: &dyn EstimatePort,
    result: Result<Quote, EstimateError>,
) -> (Option<f64>, Option<String>) {
    match result {
        Ok(quote) => (Some(quote.price_dollars), None),
        Err(e) => (None, Some(format!("{}: {}", port.name(), e))),
    }
}

/// Quote every request through both ports and compare prices
pub async fn check_agreement(
    baseline: &dyn EstimatePort,
    candidate: &dyn EstimatePort,
    requests: &[(String, QuoteRequest)],
    tolerance_pct: f64,
) -> ContractReport {
    let mut rows = Vec::with_capacity(requests.len());

    for (name, request) in requests {
        let (baseline_price, baseline_err) =
            price_or_error(baseline, baseline.quote(request).await);
        let (candidate_price, candidate_err) =
            price_or_error(candidate, candidate.quote(request).await);

        let delta = match (baseline_price, candidate_price) {
            (Some(b), Some(c)) => Some(delta_pct(b, c)),
            _ => None,
        };
        let errors: Vec<String> = [baseline_err, candidate_err].into_iter().flatten().collect();

        let row = PriceAgreement {
            name: name.clone(),
            baseline_price,
            candidate_price,
            delta_pct: delta,
            within_tolerance: delta.map_or(false, |d| d <= tolerance_pct),
            error: (!errors.is_empty()).then(|| errors.join("; ")),
        };

        if !row.within_tolerance {
            tracing::warn!(scenario = %row.name, delta_pct = ?row.delta_pct, "estimate paths disagree");
        }
        rows.push(row);
    }

    ContractReport {
        baseline: baseline.name().to_string(),
        candidate: candidate.name().to_string(),
        tolerance_pct,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_formula::LocalFormulaAdapter;
    use async_trait::async_trait;
    use cleanquote_types::EstimateInputs;

    /// Prices at a fixed multiple of the formula
    struct ScaledFormula(f64);

    #[async_trait]
    impl EstimatePort for ScaledFormula {
        fn name(&self) -> &str {
            "scaled"
        }

        async fn quote(&self, request: &QuoteRequest) -> Result<Quote, EstimateError> {
            let mut quote = LocalFormulaAdapter::default().quote_now(request)?;
            quote.price_dollars *= self.0;
            Ok(quote)
        }
    }

    struct Offline;

    #[async_trait]
    impl EstimatePort for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        async fn quote(&self, _request: &QuoteRequest) -> Result<Quote, EstimateError> {
            Err(EstimateError::Network("connection refused".to_string()))
        }
    }

    fn requests() -> Vec<(String, QuoteRequest)> {
        vec![
            ("small".to_string(), QuoteRequest::new(EstimateInputs::with_sqft(600.0))),
            ("large".to_string(), QuoteRequest::new(EstimateInputs::with_sqft(3000.0))),
        ]
    }

    #[test]
    fn test_delta_pct() {
        assert_eq!(delta_pct(200.0, 220.0), 10.0);
        assert_eq!(delta_pct(200.0, 180.0), 10.0);
        assert_eq!(delta_pct(0.0, 0.0), 0.0);
        assert!(delta_pct(0.0, 5.0).is_infinite());
    }

    #[tokio::test]
    async fn test_identical_ports_agree() {
        let local = LocalFormulaAdapter::default();
        let report = check_agreement(&local, &local, &requests(), 10.0).await;

        assert!(report.all_agree());
        assert_eq!(report.rows[0].delta_pct, Some(0.0));
        assert_eq!(report.baseline, "local");
    }

    #[tokio::test]
    async fn test_divergent_port_is_flagged() {
        let local = LocalFormulaAdapter::default();
        let report = check_agreement(&local, &ScaledFormula(1.25), &requests(), 10.0).await;

        assert!(!report.all_agree());
        assert_eq!(report.disagreements(), 2);
        assert!((report.rows[0].delta_pct.unwrap() - 25.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_within_tolerance_small_drift() {
        let local = LocalFormulaAdapter::default();
        let report = check_agreement(&local, &ScaledFormula(1.05), &requests(), 10.0).await;
        assert!(report.all_agree());
    }

    #[tokio::test]
    async fn test_failed_port_counts_as_disagreement() {
        let local = LocalFormulaAdapter::default();
        let report = check_agreement(&local, &Offline, &requests(), 10.0).await;

        let row = &report.rows[0];
        assert!(!row.within_tolerance);
        assert!(row.baseline_price.is_some());
        assert_eq!(row.candidate_price, None);
        assert_eq!(
            row.error.as_deref(),
            Some("offline: Network error: connection refused")
        );
    }
}
