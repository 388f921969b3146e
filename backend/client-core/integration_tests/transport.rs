use crate::helpers::{endpoint_of, transport};

use client_core::error::TransportErrorKind;
use client_core::{Transport, TransportRequest};

use common::RedactedApiKey;

use serde_json::json;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies that the reqwest transport returns the decoded JSON body.
///
/// **WHY THIS MATTERS**: Hosts that plug in the transport directly depend on it handing back
/// parsed JSON, not text.
///
/// **BUG THIS CATCHES**: Would catch the body being sent or decoded incorrectly.
#[tokio::test]
async fn given_json_endpoint_when_sending_then_returns_decoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"ping": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pong": 1})))
        .mount(&server)
        .await;

    let request = TransportRequest::post_json(
        endpoint_of(&server),
        &RedactedApiKey::new("k"),
        json!({"ping": 1}),
    );

    let body = transport().send(request).await.expect("successful send");

    assert_eq!(body, json!({"pong": 1}));
}

/// **VALUE**: Verifies that a non-2xx status carries its numeric code.
///
/// **WHY THIS MATTERS**: Classification matches on the status, never on the message.
///
/// **BUG THIS CATCHES**: Would catch `status_code` being dropped for unclassified statuses.
#[tokio::test]
async fn given_server_error_when_sending_then_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance 429"))
        .mount(&server)
        .await;

    let request =
        TransportRequest::post_json(endpoint_of(&server), &RedactedApiKey::new("k"), json!({}));

    let error = transport().send(request).await.unwrap_err();

    assert_eq!(error.kind(), TransportErrorKind::Other);
    assert_eq!(error.status_code(), Some(503));
}
