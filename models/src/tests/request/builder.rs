use crate::{CompletionRequestBuilder, ModelError};

use common::RedactedApiKey;

/// **VALUE**: Verifies that a blank credential cannot reach a request.
///
/// **WHY THIS MATTERS**: A request carrying an empty key can only fail remotely and costs
/// a round trip. The dispatcher checks first, but the builder refuses as well.
///
/// **BUG THIS CATCHES**: Would catch if the blank check is removed or stops trimming.
#[test]
fn given_whitespace_credential_when_building_then_returns_validation_error() {
    // GIVEN: Builder with a whitespace-only key
    let builder = CompletionRequestBuilder::default()
        .with_credential(RedactedApiKey::new("   "))
        .with_system_message("system")
        .with_user_message("Hello");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Credential cannot be blank");
        }
    }
}

/// **VALUE**: Verifies that a request without user messages is rejected.
///
/// **WHY THIS MATTERS**: Every request shape carries at least one user message; an empty
/// `prompts` tail would be answered with an unrelated completion.
///
/// **BUG THIS CATCHES**: Would catch if the emptiness check is dropped.
#[test]
fn given_no_user_messages_when_building_then_returns_validation_error() {
    let builder = CompletionRequestBuilder::default()
        .with_credential(RedactedApiKey::new("key"))
        .with_system_message("system");

    match builder.build().unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "At least one user message is required");
        }
    }
}

/// **VALUE**: Verifies that missing system message is reported before user messages.
///
/// **WHY THIS MATTERS**: The error message is what lands in the log; it must name the
/// actual missing piece.
///
/// **BUG THIS CATCHES**: Would catch reordering of validation steps.
#[test]
fn given_missing_system_message_when_building_then_names_system_message() {
    let builder = CompletionRequestBuilder::default().with_credential(RedactedApiKey::new("key"));

    match builder.build().unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "System message is required");
        }
    }
}

/// **VALUE**: Verifies that user messages keep insertion order.
///
/// **WHY THIS MATTERS**: In the selection shape the service is told "the first message is
/// the selected text". Swapping selection and prompt silently corrupts every answer.
///
/// **BUG THIS CATCHES**: Would catch if user messages are stored in a set or reversed.
#[test]
fn given_two_user_messages_when_built_then_order_is_preserved() {
    let request = CompletionRequestBuilder::default()
        .with_credential(RedactedApiKey::new("key"))
        .with_system_message("system")
        .with_user_message("selected")
        .with_user_message("prompt")
        .build()
        .expect("valid request");

    assert_eq!(request.user_messages(), ["selected", "prompt"]);
    assert_eq!(request.system_message(), "system");
    assert_eq!(request.credential().as_str(), "key");
}
