//! Client for the backend pricing endpoint
//!
//! `POST {base_url}/utilities/estimate` with the address, cleaning type and
//! property details. The backend answers `{ price, squareFootage, source }`.

use async_trait::async_trait;
use cleanquote_domain::port::EstimatePort;
use cleanquote_types::{EstimateError, Quote, QuoteRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ESTIMATE_PATH: &str = "/utilities/estimate";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateBody<'a> {
    address: &'a str,
    cleaning_type: &'a str,
    square_footage: f64,
    property_type: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EstimateResponse {
    price: f64,
    square_footage: f64,
    source: String,
}

/// Estimate port backed by the remote pricing API
pub struct RemoteApiAdapter {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RemoteApiAdapter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EstimateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EstimateError::Network(e.to_string()))?;
        Ok(Self::with_client(client, base_url, timeout))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ESTIMATE_PATH)
    }

    fn map_send_error(&self, err: reqwest::Error) -> EstimateError {
        if err.is_timeout() {
            EstimateError::Timeout(self.timeout)
        } else {
            EstimateError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl EstimatePort for RemoteApiAdapter {
    fn name(&self) -> &str {
        "remote"
    }

    async fn quote(&self, request: &QuoteRequest) -> Result<Quote, EstimateError> {
        let address = request
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| {
                EstimateError::InvalidInputs(vec![
                    "address is required for remote quotes".to_string()
                ])
            })?;

        let body = EstimateBody {
            address,
            cleaning_type: &request.cleaning_type,
            square_footage: request.inputs.sqft,
            property_type: if request.inputs.type_house != 0.0 {
                "house"
            } else {
                "apartment"
            },
        };

        let url = self.endpoint();
        tracing::debug!(%url, cleaning_type = %request.cleaning_type, "requesting remote estimate");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "remote estimate rejected");
            return Err(EstimateError::ServerRejected {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: EstimateResponse = serde_json::from_str(&text)
            .map_err(|e| EstimateError::InvalidResponse(e.to_string()))?;
        if !parsed.price.is_finite() {
            return Err(EstimateError::InvalidResponse(format!(
                "price is not a number: {}",
                parsed.price
            )));
        }

        Ok(Quote {
            price_dollars: parsed.price,
            cleaning_time_hours: None,
            square_footage: parsed.square_footage,
            source: parsed.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanquote_types::EstimateInputs;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn house_request() -> QuoteRequest {
        QuoteRequest::new(EstimateInputs {
            sqft: 1500.0,
            type_house: 1.0,
            ..Default::default()
        })
        .with_address("12 Elm St, Springfield")
        .with_cleaning_type("deep")
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let adapter =
            RemoteApiAdapter::new("http://localhost:4000/api/", Duration::from_secs(10)).unwrap();
        assert_eq!(adapter.endpoint(), "http://localhost:4000/api/utilities/estimate");
    }

    #[test]
    fn test_body_uses_camel_case() {
        let body = EstimateBody {
            address: "1 Main St",
            cleaning_type: "standard",
            square_footage: 900.0,
            property_type: "apartment",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["cleaningType"], "standard");
        assert_eq!(json["squareFootage"], 900.0);
        assert_eq!(json["propertyType"], "apartment");
    }

    #[tokio::test]
    async fn test_quote_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/utilities/estimate"))
            .and(body_json(serde_json::json!({
                "address": "12 Elm St, Springfield",
                "cleaningType": "deep",
                "squareFootage": 1500.0,
                "propertyType": "house"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "price": 189.0,
                "squareFootage": 1480.0,
                "source": "zillow"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();
        let quote = adapter.quote(&house_request()).await.unwrap();

        assert_eq!(quote.price_dollars, 189.0);
        assert_eq!(quote.square_footage, 1480.0);
        assert_eq!(quote.source, "zillow");
        assert_eq!(quote.cleaning_time_hours, None);
    }

    #[tokio::test]
    async fn test_missing_address_is_rejected_locally() {
        let adapter =
            RemoteApiAdapter::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let request = QuoteRequest::new(EstimateInputs::with_sqft(900.0));

        let err = adapter.quote(&request).await.unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInputs(_)));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/utilities/estimate"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let adapter = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();
        match adapter.quote(&house_request()).await {
            Err(EstimateError::ServerRejected { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected ServerRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_error_maps_to_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/utilities/estimate"))
            .respond_with(ResponseTemplate::new(422).set_body_string("address not serviceable"))
            .mount(&server)
            .await;

        let adapter = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();
        let err = adapter.quote(&house_request()).await.unwrap_err();

        assert_eq!(err.kind(), "server_rejected");
        match err {
            EstimateError::ServerRejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "address not serviceable");
            }
            other => panic!("expected ServerRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/utilities/estimate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "cost": 10 })),
            )
            .mount(&server)
            .await;

        let adapter = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();
        let err = adapter.quote(&house_request()).await.unwrap_err();
        assert!(matches!(err, EstimateError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/utilities/estimate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(3))
                    .set_body_json(serde_json::json!({
                        "price": 150.0,
                        "squareFootage": 1500.0,
                        "source": "model"
                    })),
            )
            .mount(&server)
            .await;

        let timeout = Duration::from_millis(300);
        let adapter = RemoteApiAdapter::new(server.uri(), timeout).unwrap();
        match adapter.quote(&house_request()).await {
            Err(EstimateError::Timeout(after)) => assert_eq!(after, timeout),
            other => panic!("expected Timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) is not listening on loopback in test environments
        let adapter =
            RemoteApiAdapter::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = adapter.quote(&house_request()).await.unwrap_err();
        assert!(matches!(err, EstimateError::Network(_)));
    }
}
