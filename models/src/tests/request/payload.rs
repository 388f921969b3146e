use crate::{ChatMessage, ChatRole, CompletionRequestBuilder};

use common::RedactedApiKey;

use serde_json::json;

/// **VALUE**: Verifies the wire body `{model, prompts}` with lowercase roles.
///
/// **WHY THIS MATTERS**: The completion gateway expects exactly this shape; any renamed
/// field or capitalized role produces a remote error classified as unknown.
///
/// **BUG THIS CATCHES**: Would catch serde attribute regressions on `ChatRole` or the payload.
#[test]
fn given_request_when_payload_serialized_then_matches_wire_shape() {
    // GIVEN: A selection-shaped request
    let request = CompletionRequestBuilder::default()
        .with_credential(RedactedApiKey::new("key"))
        .with_system_message("be helpful")
        .with_user_message("selected")
        .with_user_message("prompt")
        .build()
        .expect("valid request");

    // WHEN: Rendering the payload
    let value = serde_json::to_value(request.payload("gpt-3.5-turbo")).expect("serializable");

    // THEN: Exact wire shape, credential absent
    assert_eq!(
        value,
        json!({
            "model": "gpt-3.5-turbo",
            "prompts": [
                {"role": "system", "content": "be helpful"},
                {"role": "user", "content": "selected"},
                {"role": "user", "content": "prompt"},
            ]
        })
    );
}

/// **VALUE**: Verifies that `messages()` always starts with the system message.
///
/// **WHY THIS MATTERS**: The system message frames the whole exchange; it must lead.
///
/// **BUG THIS CATCHES**: Would catch if `messages()` appends the system message last.
#[test]
fn given_request_when_messages_listed_then_system_leads() {
    let request = CompletionRequestBuilder::default()
        .with_credential(RedactedApiKey::new("key"))
        .with_system_message("sys")
        .with_user_message("Hello")
        .build()
        .expect("valid request");

    let messages = request.messages();

    assert_eq!(
        messages,
        vec![ChatMessage::system("sys"), ChatMessage::user("Hello")]
    );
    assert_eq!(messages[0].role, ChatRole::System);
}
