//! End-to-end tests for the remote estimate path against a mock pricing API

use std::time::Duration;

use cleanquote_app::app::{check_agreement, EstimateFormController, FormState};
use cleanquote_app::local_formula::LocalFormulaAdapter;
use cleanquote_domain::model::fixture_scenarios;
use cleanquote_domain::service::compute_cleaning_price_dollars;
use cleanquote_infra::RemoteApiAdapter;
use cleanquote_types::{EstimateError, EstimateInputs, QuoteRequest, QUOTE_FAILED_MESSAGE};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn request() -> QuoteRequest {
    QuoteRequest::new(EstimateInputs {
        sqft: 1800.0,
        type_house: 1.0,
        ..Default::default()
    })
    .with_address("88 Harbor Rd")
}

/// Mock backend that prices with the same regression as the local formula,
/// using only the fields the endpoint receives
async fn formula_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/utilities/estimate"))
        .respond_with(|req: &Request| {
            let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap_or_default();
            let sqft = body["squareFootage"].as_f64().unwrap_or(0.0);
            let house = body["propertyType"] == "house";
            let inputs = EstimateInputs {
                sqft,
                type_house: if house { 1.0 } else { 0.0 },
                ..Default::default()
            };
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "price": compute_cleaning_price_dollars(&inputs),
                "squareFootage": sqft,
                "source": "regression"
            }))
        })
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_form_submits_through_remote_port() {
    let server = formula_backend().await;
    let adapter = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();
    let controller = EstimateFormController::new(adapter, Duration::from_secs(5));

    let quote = controller.submit(&request()).await.unwrap();

    // 114.87 + 0.0343 * 1800 + 10.38 = 186.99
    assert_eq!(quote.price_dollars, 187.0);
    assert_eq!(quote.source, "regression");
    assert!(matches!(controller.state(), FormState::Success { .. }));
}

#[tokio::test]
async fn test_form_shows_uniform_message_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/utilities/estimate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let adapter = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();
    let controller = EstimateFormController::new(adapter, Duration::from_secs(5));

    let err = controller.submit(&request()).await.unwrap_err();

    assert!(matches!(err, EstimateError::ServerRejected { status: 500, .. }));
    match controller.state() {
        FormState::Error { message, kind } => {
            assert_eq!(message, QUOTE_FAILED_MESSAGE);
            assert_eq!(kind, "server_rejected");
        }
        other => panic!("expected error state, got {:?}", other),
    }

    controller.reset();
    assert_eq!(controller.state(), FormState::Idle);
}

#[tokio::test]
async fn test_form_times_out_on_slow_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/utilities/estimate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(serde_json::json!({
                    "price": 200.0,
                    "squareFootage": 1800.0,
                    "source": "regression"
                })),
        )
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(250);
    let adapter = RemoteApiAdapter::new(server.uri(), timeout).unwrap();
    let controller = EstimateFormController::new(adapter, timeout);

    let err = controller.submit(&request()).await.unwrap_err();

    assert!(matches!(err, EstimateError::Timeout(d) if d == timeout));
    assert!(controller.is_submit_enabled());
}

#[tokio::test]
async fn test_paths_agree_when_backend_uses_formula() {
    let server = formula_backend().await;
    let local = LocalFormulaAdapter::default();
    let remote = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();

    // The endpoint only sees sqft and property type, so compare on inputs
    // without frequency or rotation flags
    let requests: Vec<(String, QuoteRequest)> = fixture_scenarios()
        .into_iter()
        .map(|s| {
            let inputs = EstimateInputs {
                sqft: s.inputs.sqft,
                type_house: s.inputs.type_house,
                ..Default::default()
            };
            (s.name, QuoteRequest::new(inputs).with_address("1 Sample St"))
        })
        .collect();

    let report = check_agreement(&local, &remote, &requests, 0.5).await;

    assert_eq!(report.rows.len(), 5);
    assert!(report.all_agree(), "{:?}", report.rows);
}

#[tokio::test]
async fn test_paths_diverge_against_flat_rate_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/utilities/estimate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "price": 400.0,
            "squareFootage": 0.0,
            "source": "flat"
        })))
        .mount(&server)
        .await;

    let local = LocalFormulaAdapter::default();
    let remote = RemoteApiAdapter::new(server.uri(), Duration::from_secs(5)).unwrap();
    let requests: Vec<(String, QuoteRequest)> = fixture_scenarios()
        .into_iter()
        .map(|s| (s.name, QuoteRequest::new(s.inputs).with_address("1 Sample St")))
        .collect();

    let report = check_agreement(&local, &remote, &requests, 10.0).await;

    assert_eq!(report.disagreements(), 5);
    assert_eq!(report.candidate, "remote");
}
