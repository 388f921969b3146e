use crate::helpers::{TEST_API_KEY, dispatcher, endpoint_of, unreachable_endpoint};

use client_core::{COMPLETION_MODEL, RAPID_API_KEY_HEADER};

use common::RedactedApiKey;
use models::{QuickAction, ResultStatus};

use serde_json::json;
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for RequestDispatcher over real HTTP
// ============================================================================

/// **VALUE**: Verifies an end-to-end completion against a mock endpoint.
///
/// **WHY THIS MATTERS**: This is the whole happy path: headers, payload, response parsing.
///
/// **BUG THIS CATCHES**: Would catch header casing issues, a wrong HTTP method, or the
/// content pointer reading a different choice.
#[tokio::test]
async fn given_successful_completion_when_dispatching_then_returns_first_choice() {
    // GIVEN: An endpoint answering with two choices
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header(RAPID_API_KEY_HEADER, TEST_API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({"model": COMPLETION_MODEL})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"content": "Bonjour"}},
                {"message": {"content": "Salut"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Dispatching a translation
    let result = dispatcher(endpoint_of(&server))
        .quick_action(
            &RedactedApiKey::new(TEST_API_KEY),
            "Hello",
            &QuickAction::translate("French"),
        )
        .await;

    // THEN: First choice only
    assert_eq!(result.status(), ResultStatus::Success);
    assert_eq!(result.body(), "Bonjour");
}

/// **VALUE**: Verifies that an empty key makes no HTTP call at all.
///
/// **WHY THIS MATTERS**: The no-network precondition is observable from outside only by
/// counting requests at the server.
///
/// **BUG THIS CATCHES**: Would catch any request leaving the process with a blank key.
#[tokio::test]
async fn given_empty_key_when_dispatching_then_server_receives_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = dispatcher(endpoint_of(&server))
        .dispatch(&RedactedApiKey::new(" "), "Hello", Some("text"), None)
        .await;

    assert_eq!(result.status(), ResultStatus::EmptyApiKey);
}

/// **VALUE**: Verifies HTTP status classification for completions.
///
/// **WHY THIS MATTERS**: 429 and 403 lead the user to upgrade or subscribe; any other status
/// is an unknown error.
///
/// **BUG THIS CATCHES**: Would catch status codes being lost between reqwest and the classifier.
#[tokio::test]
async fn given_error_statuses_when_dispatching_then_maps_to_result_status() {
    let cases = [
        (429, ResultStatus::ExceededQuota),
        (403, ResultStatus::UserUnsubscribed),
        (401, ResultStatus::UnknownError),
        (500, ResultStatus::UnknownError),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .expect(1)
            .mount(&server)
            .await;

        let result = dispatcher(endpoint_of(&server))
            .dispatch(&RedactedApiKey::new(TEST_API_KEY), "Hello", None, None)
            .await;

        assert_eq!(result.status(), expected, "HTTP {status}");
        assert!(result.body().is_empty());
    }
}

/// **VALUE**: Verifies that a refused connection reads as "internet disconnected".
///
/// **WHY THIS MATTERS**: Offline users should get the connectivity notice, not a generic error.
///
/// **BUG THIS CATCHES**: Would catch connect errors falling through to `Other`.
#[tokio::test]
async fn given_unreachable_endpoint_when_dispatching_then_internet_disconnected() {
    let result = dispatcher(unreachable_endpoint())
        .dispatch(&RedactedApiKey::new(TEST_API_KEY), "Hello", None, None)
        .await;

    assert_eq!(result.status(), ResultStatus::InternetDisconnected);
}

/// **VALUE**: Verifies that a non-JSON success body is an unknown error, not a success.
///
/// **WHY THIS MATTERS**: A captive portal answering 200 with HTML must not insert HTML into
/// the note.
///
/// **BUG THIS CATCHES**: Would catch decode failures being swallowed as empty successes.
#[tokio::test]
async fn given_html_success_body_when_dispatching_then_unknown_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let result = dispatcher(endpoint_of(&server))
        .dispatch(&RedactedApiKey::new(TEST_API_KEY), "Hello", None, None)
        .await;

    assert_eq!(result.status(), ResultStatus::UnknownError);
}
