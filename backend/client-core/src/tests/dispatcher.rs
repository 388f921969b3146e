// Unit tests for RequestDispatcher against an in-memory transport.

use super::scripted_transport::{Reply, ScriptedTransport};

use crate::{COMPLETION_MODEL, RAPID_API_KEY_HEADER, RequestDispatcher};

use common::RedactedApiKey;
use models::{QuickAction, ResultStatus};

use std::sync::Arc;

use serde_json::json;
use url::Url;

fn dispatcher(transport: &Arc<ScriptedTransport>) -> RequestDispatcher<Arc<ScriptedTransport>> {
    RequestDispatcher::new(
        Arc::clone(transport),
        Url::parse("https://completion.test/").unwrap(),
    )
}

/// **VALUE**: Verifies that blank credentials never reach the transport.
///
/// **WHY THIS MATTERS**: A user who never configured a key must be sent to the settings,
/// not shown a network error after a pointless round trip.
///
/// **BUG THIS CATCHES**: Would catch the precondition moving after the send, or checking
/// `is_empty()` instead of trimming.
#[tokio::test]
async fn given_blank_credentials_when_dispatching_then_returns_empty_api_key_without_call() {
    // GIVEN: A transport that would succeed
    let transport = Arc::new(ScriptedTransport::replying(Reply::Json(json!({}))));
    let dispatcher = dispatcher(&transport);

    for key in ["", "   ", "\t\n"] {
        // WHEN: Dispatching with a blank key
        let result = dispatcher
            .dispatch(&RedactedApiKey::new(key), "Hello", None, None)
            .await;

        // THEN: EmptyApiKey and no call
        assert_eq!(result.status(), ResultStatus::EmptyApiKey);
        assert!(result.body().is_empty());
    }
    assert_eq!(transport.call_count(), 0, "Transport must not be called");
}

/// **VALUE**: Verifies the outbound request: POST, key header, model and prompts.
///
/// **WHY THIS MATTERS**: The gateway authenticates by header and routes by model name.
///
/// **BUG THIS CATCHES**: Would catch a missing header or a renamed payload field.
#[tokio::test]
async fn given_prompt_when_dispatching_then_sends_single_post_with_key_header() {
    let transport = Arc::new(ScriptedTransport::replying(Reply::Json(json!({
        "choices": [{"message": {"content": "Hi there"}}]
    }))));

    let result = dispatcher(&transport)
        .dispatch(&RedactedApiKey::new("my-key"), "Hello", None, None)
        .await;

    assert_eq!(result.status(), ResultStatus::Success);
    assert_eq!(result.body(), "Hi there");
    assert_eq!(transport.call_count(), 1);

    let request = transport.last_request();
    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.header(RAPID_API_KEY_HEADER), Some("my-key"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body["model"], COMPLETION_MODEL);

    let prompts = request.body["prompts"].as_array().expect("prompts array");
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0]["role"], "system");
    assert_eq!(prompts[1], json!({"role": "user", "content": "Hello"}));
}

/// **VALUE**: Verifies the quick-action helper sends instruction and selection only.
///
/// **WHY THIS MATTERS**: Quick actions are one click; they must not depend on the prompt box.
///
/// **BUG THIS CATCHES**: Would catch the helper passing the instruction as a user message.
#[tokio::test]
async fn given_translate_action_when_dispatched_then_system_message_names_language() {
    let transport = Arc::new(ScriptedTransport::replying(Reply::Json(json!({
        "choices": [{"message": {"content": "Bonjour"}}]
    }))));

    let result = dispatcher(&transport)
        .quick_action(
            &RedactedApiKey::new("key"),
            "Hello",
            &QuickAction::translate("French"),
        )
        .await;

    assert_eq!(result.body(), "Bonjour");
    let request = transport.last_request();
    let prompts = request.body["prompts"].as_array().expect("prompts array");
    assert_eq!(prompts.len(), 2);
    assert!(
        prompts[0]["content"]
            .as_str()
            .unwrap()
            .starts_with("You are an French translator. Today is ")
    );
    assert_eq!(prompts[1], json!({"role": "user", "content": "Hello"}));
}

/// **VALUE**: Verifies classification of transport error messages for completions.
///
/// **WHY THIS MATTERS**: Each status opens a different dialog; an unmatched failure must be
/// reported as unknown, not as an invalid key.
///
/// **BUG THIS CATCHES**: Would catch the completion path using the key-check fallback.
#[tokio::test]
async fn given_transport_error_messages_when_dispatching_then_status_is_classified() {
    let cases = [
        ("Error: disconnected from network", ResultStatus::InternetDisconnected),
        ("Request failed, status 429", ResultStatus::ExceededQuota),
        ("REQUEST FAILED, STATUS 403", ResultStatus::UserUnsubscribed),
        ("Request failed, status 500", ResultStatus::UnknownError),
    ];

    for (message, expected) in cases {
        let transport = Arc::new(ScriptedTransport::replying(Reply::ErrorMessage(message)));

        let result = dispatcher(&transport)
            .dispatch(&RedactedApiKey::new("key"), "Hello", None, None)
            .await;

        assert_eq!(result.status(), expected, "message: {message}");
        assert!(result.body().is_empty());
        assert_eq!(transport.call_count(), 1, "No retry expected");
    }
}

/// **VALUE**: Verifies that a success without `choices[0].message.content` is still a
/// success, with an empty body.
///
/// **WHY THIS MATTERS**: This is the established behavior hosts rely on; changing it to an
/// error would pop dialogs where users used to see an empty answer.
///
/// **BUG THIS CATCHES**: Would catch a panic on missing fields or a silent reclassification.
#[tokio::test]
async fn given_response_without_content_when_dispatching_then_success_with_empty_body() {
    for body in [json!({}), json!({"choices": []}), json!({"choices": [{"message": {}}]})] {
        let transport = Arc::new(ScriptedTransport::replying(Reply::Json(body)));

        let result = dispatcher(&transport)
            .dispatch(&RedactedApiKey::new("key"), "Hello", None, None)
            .await;

        assert_eq!(result.status(), ResultStatus::Success);
        assert_eq!(result.body(), "");
    }
}
