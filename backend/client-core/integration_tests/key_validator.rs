use crate::helpers::{TEST_API_KEY, endpoint_of, unreachable_endpoint, validator};

use client_core::RAPID_API_KEY_HEADER;

use common::RedactedApiKey;
use models::ResultStatus;

use serde_json::json;
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a successful key check end to end.
///
/// **WHY THIS MATTERS**: "Test key" is the first thing a new user does.
///
/// **BUG THIS CATCHES**: Would catch a changed marker payload or missing key header.
#[tokio::test]
async fn given_valid_key_when_validating_then_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header(RAPID_API_KEY_HEADER, TEST_API_KEY))
        .and(body_json(json!({"invokeKey": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": true})))
        .expect(1)
        .mount(&server)
        .await;

    let result = validator(endpoint_of(&server))
        .validate(&RedactedApiKey::new(TEST_API_KEY))
        .await;

    assert_eq!(result.status(), ResultStatus::Success);
    assert_eq!(result.body(), "");
}

/// **VALUE**: Verifies `{"valid": false}` over HTTP.
///
/// **WHY THIS MATTERS**: The gateway answers 200 for a rejected key; only the flag tells.
///
/// **BUG THIS CATCHES**: Would catch treating any 200 as a valid key.
#[tokio::test]
async fn given_rejected_key_when_validating_then_invalid_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": false})))
        .mount(&server)
        .await;

    let result = validator(endpoint_of(&server))
        .validate(&RedactedApiKey::new(TEST_API_KEY))
        .await;

    assert_eq!(result.status(), ResultStatus::InvalidApiKey);
}

/// **VALUE**: Verifies HTTP status classification for key checks, including the fallback.
///
/// **WHY THIS MATTERS**: An unexplained failure during a key check means "Invalid API Key";
/// during a completion it means "unknown error". Both must hold at once.
///
/// **BUG THIS CATCHES**: Would catch the two operations drifting to a shared default.
#[tokio::test]
async fn given_error_statuses_when_validating_then_maps_with_invalid_key_fallback() {
    let cases = [
        (429, ResultStatus::ExceededQuota),
        (403, ResultStatus::UserUnsubscribed),
        (401, ResultStatus::InvalidApiKey),
        (502, ResultStatus::InvalidApiKey),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let result = validator(endpoint_of(&server))
            .validate(&RedactedApiKey::new(TEST_API_KEY))
            .await;

        assert_eq!(result.status(), expected, "HTTP {status}");
    }
}

/// **VALUE**: Verifies offline detection during key checks.
///
/// **WHY THIS MATTERS**: The settings panel shows "Internet Disconnected" instead of blaming
/// the key.
///
/// **BUG THIS CATCHES**: Would catch connect errors being classified as invalid keys.
#[tokio::test]
async fn given_unreachable_endpoint_when_validating_then_internet_disconnected() {
    let result = validator(unreachable_endpoint())
        .validate(&RedactedApiKey::new(TEST_API_KEY))
        .await;

    assert_eq!(result.status(), ResultStatus::InternetDisconnected);
}
