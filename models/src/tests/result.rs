use crate::{CompletionResult, ResultStatus};

/// **VALUE**: Verifies the body invariant: only success results carry text.
///
/// **WHY THIS MATTERS**: The host renders the body of a success and shows a notice or
/// dialog otherwise. A failure carrying text would be inserted into the document.
///
/// **BUG THIS CATCHES**: Would catch a `failure` constructor that accepts a body.
#[test]
fn given_each_failure_status_when_constructed_then_body_is_empty() {
    let failures = [
        ResultStatus::InternetDisconnected,
        ResultStatus::ExceededQuota,
        ResultStatus::InvalidApiKey,
        ResultStatus::EmptyApiKey,
        ResultStatus::EmptyPrompt,
        ResultStatus::UserUnsubscribed,
        ResultStatus::UnknownError,
    ];

    for status in failures {
        let result = CompletionResult::failure(status);
        assert_eq!(result.status(), status);
        assert!(result.body().is_empty(), "{status} must not carry a body");
        assert!(!result.is_success());
    }
}

/// **VALUE**: Verifies that success keeps its body untouched.
///
/// **WHY THIS MATTERS**: Completion text is inserted verbatim, whitespace included.
///
/// **BUG THIS CATCHES**: Would catch trimming or other normalization sneaking in.
#[test]
fn given_success_when_constructed_then_body_is_verbatim() {
    let result = CompletionResult::success("  Bonjour\n");

    assert!(result.is_success());
    assert_eq!(result.body(), "  Bonjour\n");
    assert_eq!(result.into_body(), "  Bonjour\n");
}

/// **VALUE**: Verifies the serialized status names.
///
/// **WHY THIS MATTERS**: Results are serialized for hosts that consume them as JSON; the
/// names must stay stable.
///
/// **BUG THIS CATCHES**: Would catch accidental changes to the serde renames.
#[test]
fn given_result_when_serialized_then_uses_camel_case_status() {
    let value = serde_json::to_value(CompletionResult::empty_api_key()).expect("serializable");

    assert_eq!(value["status"], "emptyAPIKey");
    assert_eq!(value["body"], "");
    assert_eq!(
        serde_json::to_value(ResultStatus::InternetDisconnected).expect("serializable"),
        "internetDisconnected"
    );
}
