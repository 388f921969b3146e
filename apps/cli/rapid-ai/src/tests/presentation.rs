// Unit tests for status presentation and the key test sequence

use super::stub_transport::StubTransport;
use crate::presentation::{
    DialogAction, KeyTestStatus, KeyTestSurface, Presentation, key_test_status, present,
    run_key_test,
};

use client_core::KeyValidator;

use common::RedactedApiKey;
use models::{CompletionResult, ResultStatus};

use serde_json::json;
use url::Url;

/// Records every surface call in order.
#[derive(Default)]
struct RecordingSurface {
    events: Vec<String>,
}

impl KeyTestSurface for RecordingSurface {
    fn set_loading_state(&mut self, loading: bool) {
        self.events.push(format!("loading:{loading}"));
    }

    fn set_status_visibility(&mut self, visible: bool) {
        self.events.push(format!("visible:{visible}"));
    }

    fn set_test_status(&mut self, status: &KeyTestStatus) {
        self.events.push(format!("status:{}:{}", status.icon, status.message));
    }
}

fn validator(transport: StubTransport) -> KeyValidator<StubTransport> {
    KeyValidator::new(transport, Url::parse("https://ai.example.test/").unwrap())
}

/// **VALUE**: Verifies a successful completion renders its body.
///
/// **BUG THIS CATCHES**: Would catch a success being shown as a notice or
/// the body being dropped on the way to the document.
#[test]
fn given_success_when_presented_then_body_is_rendered() {
    // GIVEN: A successful completion
    let result = CompletionResult::success("# Fixed heading");

    // WHEN: Presenting it
    let presentation = present(&result);

    // THEN: The body is rendered as-is
    assert_eq!(presentation, Presentation::Render("# Fixed heading".into()));
}

/// **VALUE**: Checks each notice status maps to its exact text.
///
/// **WHY THIS MATTERS**: Users see these verbatim; the wording is part of the
/// product surface.
///
/// **BUG THIS CATCHES**: Would catch swapped or reworded notices.
#[test]
fn given_notice_statuses_when_presented_then_exact_notice_text() {
    // GIVEN: Every status that maps to a notice
    let cases = [
        (
            ResultStatus::InternetDisconnected,
            "Please connect to the internet.",
        ),
        (
            ResultStatus::UnknownError,
            "An Error Occurred. Please try again later",
        ),
        (ResultStatus::EmptyPrompt, "Please enter the prompt"),
    ];

    for (status, expected) in cases {
        // WHEN: Presenting a failure with that status
        let presentation = present(&CompletionResult::failure(status));

        // THEN: A notice with the exact text
        assert_eq!(presentation, Presentation::Notice(expected), "{status}");
    }
}

/// **VALUE**: Checks every dialog status gets its title and corrective action.
///
/// **WHY THIS MATTERS**: Dialogs are how users fix quota, subscription and
/// key problems; the wrong action sends them to the wrong place.
///
/// **BUG THIS CATCHES**: Would catch mixing up the quota and subscription
/// dialogs or pointing key problems anywhere but the settings.
#[test]
fn given_dialog_statuses_when_presented_then_title_and_action_match() {
    // GIVEN: Every status that maps to a dialog
    let cases = [
        (
            ResultStatus::ExceededQuota,
            "Plan quota limit reached",
            DialogAction::UpgradePlan,
        ),
        (
            ResultStatus::UserUnsubscribed,
            "No subscription found",
            DialogAction::Subscribe,
        ),
        (
            ResultStatus::EmptyApiKey,
            "Missing API Key",
            DialogAction::OpenSettings,
        ),
        (
            ResultStatus::InvalidApiKey,
            "Invalid API key",
            DialogAction::OpenSettings,
        ),
    ];

    for (status, expected_title, expected_action) in cases {
        // WHEN: Presenting a failure with that status
        let presentation = present(&CompletionResult::failure(status));

        // THEN: A dialog with the expected title and action
        match presentation {
            Presentation::Dialog {
                title,
                subtitle,
                action,
            } => {
                assert_eq!(title, expected_title);
                assert_eq!(action, expected_action);
                assert!(!subtitle.is_empty());
            }
            other => panic!("Expected dialog for {status}, got {other:?}"),
        }
    }
    assert_eq!(DialogAction::OpenSettings.label(), "Go to Settings");
}

/// **VALUE**: Checks the key test messages and icons.
///
/// **BUG THIS CATCHES**: Would catch an unexpected status (such as
/// UnknownError) showing a success or blank message instead of the invalid
/// key fallback.
#[test]
fn given_statuses_when_mapped_for_key_test_then_message_and_icon_match() {
    // GIVEN/WHEN/THEN: Each status maps to its panel message
    assert_eq!(
        key_test_status(ResultStatus::Success),
        KeyTestStatus {
            message: "It Works Perfctly",
            icon: "badge-check"
        }
    );
    assert_eq!(
        key_test_status(ResultStatus::InternetDisconnected).icon,
        "unplug"
    );
    assert_eq!(
        key_test_status(ResultStatus::ExceededQuota).message,
        "Your quota has exceeded the current plan. Please upgrade your plan"
    );
    assert_eq!(
        key_test_status(ResultStatus::UserUnsubscribed),
        KeyTestStatus {
            message: "You are not subscribed to the API",
            icon: "shield-alert"
        }
    );
    assert_eq!(
        key_test_status(ResultStatus::EmptyApiKey).icon,
        "key-round"
    );

    // AND: Anything unexpected falls back to the invalid key message
    let fallback = KeyTestStatus {
        message: "Invalid API Key",
        icon: "ban",
    };
    assert_eq!(key_test_status(ResultStatus::InvalidApiKey), fallback);
    assert_eq!(key_test_status(ResultStatus::UnknownError), fallback);
    assert_eq!(key_test_status(ResultStatus::EmptyPrompt), fallback);
}

/// **VALUE**: Verifies the surface is driven in order around a valid key test.
///
/// **WHY THIS MATTERS**: Any panel implementing the surface relies on this
/// sequence; a stale status visible while loading, or a spinner left on,
/// misleads the user.
///
/// **BUG THIS CATCHES**: Would catch reordering the calls or forgetting to
/// turn loading off.
#[tokio::test]
async fn given_valid_key_when_running_key_test_then_surface_sequence_is_ordered() {
    // GIVEN: A service that accepts the key
    let validator = validator(StubTransport::json(json!({"valid": true})));
    let mut surface = RecordingSurface::default();

    // WHEN: Running the key test
    let status = run_key_test(&mut surface, &validator, &RedactedApiKey::new("key-123")).await;

    // THEN: Success, with the surface driven in order
    assert_eq!(status, ResultStatus::Success);
    assert_eq!(
        surface.events,
        vec![
            "loading:true",
            "visible:false",
            "status:badge-check:It Works Perfctly",
            "visible:true",
            "loading:false",
        ]
    );
}

/// **VALUE**: Verifies an empty key still finishes the surface sequence
/// without contacting the service.
///
/// **BUG THIS CATCHES**: Would catch an early return that leaves the panel
/// stuck in its loading state.
#[tokio::test]
async fn given_empty_key_when_running_key_test_then_missing_key_shown_without_call() {
    // GIVEN: A blank key
    let validator = validator(StubTransport::json(json!({"valid": true})));
    let mut surface = RecordingSurface::default();

    // WHEN: Running the key test
    let status = run_key_test(&mut surface, &validator, &RedactedApiKey::new("   ")).await;

    // THEN: EmptyApiKey, the missing key status, and loading ends off
    assert_eq!(status, ResultStatus::EmptyApiKey);
    assert!(surface.events.contains(&"status:key-round:Missing API Key".to_string()));
    assert_eq!(surface.events.last().map(String::as_str), Some("loading:false"));
}

/// **VALUE**: Verifies transport failures show their classified status.
///
/// **BUG THIS CATCHES**: Would catch the key test collapsing a quota failure
/// into "Invalid API Key".
#[tokio::test]
async fn given_quota_failure_when_running_key_test_then_quota_status_shown() {
    // GIVEN: A service reporting a rate limit
    let validator = validator(StubTransport::failing("Request failed, status code 429"));
    let mut surface = RecordingSurface::default();

    // WHEN: Running the key test
    let status = run_key_test(&mut surface, &validator, &RedactedApiKey::new("key-123")).await;

    // THEN: The quota status is surfaced
    assert_eq!(status, ResultStatus::ExceededQuota);
    assert!(surface.events.iter().any(|e| e.starts_with("status:shield-alert:Your quota")));
}
