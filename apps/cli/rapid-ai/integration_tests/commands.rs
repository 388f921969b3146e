use crate::helpers::{TEST_API_KEY, context, settings_with_key};

use client_core::{AppSettings, RAPID_API_KEY_HEADER};

use rapid_ai::commands::ask::{QuickActionKind, ask, quick_action};
use rapid_ai::commands::settings::{set_key, set_language, show_settings, test_key};
use rapid_ai::error::RapidAiError;
use rapid_ai::presentation::{Presentation, present};
use rapid_ai::terminal::TerminalSurface;

use models::ResultStatus;

use serde_json::json;
use wiremock::matchers::{any, body_json, header, method};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

// ============================================================================
// Integration tests for host commands over real HTTP
// These exercise settings state, the core operations and presentation together
// ============================================================================

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{"message": {"content": content}}]
    }))
}

/// **VALUE**: Verifies a blank prompt is caught before any request is sent.
///
/// **WHY THIS MATTERS**: Empty prompts would burn quota for nothing.
///
/// **BUG THIS CATCHES**: Would catch the prompt check moving after dispatch.
#[tokio::test]
async fn given_blank_prompt_when_asking_then_empty_prompt_without_call() {
    // GIVEN: A server that must not be called
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (ctx, _dir) = context(&server, settings_with_key());

    // WHEN: Asking with a whitespace prompt
    let result = ask(&ctx, "   \n", None).await;

    // THEN: EmptyPrompt, shown as the validation notice
    assert_eq!(result.status(), ResultStatus::EmptyPrompt);
    assert_eq!(
        present(&result),
        Presentation::Notice("Please enter the prompt")
    );
}

/// **VALUE**: Verifies the credential is read when the command runs.
///
/// **WHY THIS MATTERS**: Users paste a key in the settings and retry
/// immediately; the retry must use the new key.
///
/// **BUG THIS CATCHES**: Would catch the dispatcher capturing the key at
/// construction time.
#[tokio::test]
async fn given_key_set_after_startup_when_asking_then_new_key_is_sent() {
    // GIVEN: Startup without a key, and a server expecting the new one
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header(RAPID_API_KEY_HEADER, TEST_API_KEY))
        .respond_with(completion("42"))
        .expect(1)
        .mount(&server)
        .await;
    let (ctx, _dir) = context(&server, AppSettings::default());

    // WHEN: Asking before and after setting the key
    let before = ask(&ctx, "What is six times seven?", None).await;
    set_key(&ctx, TEST_API_KEY).await.unwrap();
    let after = ask(&ctx, "What is six times seven?", None).await;

    // THEN: Missing key first, then the answer
    assert_eq!(before.status(), ResultStatus::EmptyApiKey);
    assert_eq!(after.status(), ResultStatus::Success);
    assert_eq!(present(&after), Presentation::Render("42".into()));
}

/// **VALUE**: Verifies translation follows the configured language.
///
/// **BUG THIS CATCHES**: Would catch the translate action ignoring
/// `set-language`, or the language being stored in the user's casing.
#[tokio::test]
async fn given_language_changed_when_translating_then_system_message_names_it() {
    // GIVEN: A server that only answers German translation requests
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(|request: &Request| {
            String::from_utf8_lossy(&request.body).contains("You are an German translator")
        })
        .respond_with(completion("Hallo"))
        .expect(1)
        .mount(&server)
        .await;
    let (ctx, _dir) = context(&server, settings_with_key());

    // WHEN: Switching to german (lowercase) and translating
    let stored = set_language(&ctx, "german").await.unwrap();
    let result = quick_action(&ctx, QuickActionKind::Translate, "Hello")
        .await
        .unwrap();

    // THEN: The listed spelling is stored and used
    assert_eq!(stored, "German");
    assert_eq!(result.body(), "Hallo");
}

/// **VALUE**: Verifies quick actions refuse an empty selection.
///
/// **WHY THIS MATTERS**: Quick actions only exist for selected text.
///
/// **BUG THIS CATCHES**: Would catch an empty selection being sent as a
/// plain prompt.
#[tokio::test]
async fn given_empty_selection_when_running_quick_action_then_input_error_without_call() {
    // GIVEN: A server that must not be called
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (ctx, _dir) = context(&server, settings_with_key());

    // WHEN: Running grammar correction on nothing
    let result = quick_action(&ctx, QuickActionKind::Grammar, "").await;

    // THEN: An input error
    assert!(matches!(result, Err(RapidAiError::Input { .. })));
}

/// **VALUE**: Verifies an unsupported language is rejected and nothing changes.
///
/// **BUG THIS CATCHES**: Would catch arbitrary strings reaching the system
/// message.
#[tokio::test]
async fn given_unsupported_language_when_setting_then_rejected_and_unchanged() {
    // GIVEN: Default settings
    let server = MockServer::start().await;
    let (ctx, _dir) = context(&server, settings_with_key());

    // WHEN: Setting a language that is not offered
    let result = set_language(&ctx, "Klingon").await;

    // THEN: Rejected, English still configured
    assert!(matches!(result, Err(RapidAiError::Input { .. })));
    assert_eq!(ctx.state.translate_to().await, "English");
}

/// **VALUE**: Verifies a key test against a service that rejects the key.
///
/// **BUG THIS CATCHES**: Would catch the terminal reporting success for a
/// `valid: false` answer, or the wrong body being sent.
#[tokio::test]
async fn given_rejected_key_when_testing_then_terminal_shows_invalid_key() {
    // GIVEN: A service answering valid=false to the validation ping
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"invokeKey": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": false})))
        .expect(1)
        .mount(&server)
        .await;
    let (ctx, _dir) = context(&server, AppSettings::default());
    let mut surface = TerminalSurface::new(Vec::new());

    // WHEN: Testing an explicitly given key
    let status = test_key(&ctx, &mut surface, Some("wrong-key")).await;

    // THEN: InvalidApiKey on the terminal
    assert_eq!(status, ResultStatus::InvalidApiKey);
    let printed = String::from_utf8(surface.into_inner()).unwrap();
    assert!(printed.contains("[ban] Invalid API Key"), "printed: {printed}");
}

/// **VALUE**: Verifies the settings summary never prints the key.
///
/// **BUG THIS CATCHES**: Would catch the raw key being formatted into output
/// that ends up in terminal scrollback or screenshots.
#[tokio::test]
async fn given_stored_key_when_showing_settings_then_key_is_not_printed() {
    // GIVEN: Settings with a key
    let server = MockServer::start().await;
    let (ctx, _dir) = context(&server, settings_with_key());

    // WHEN: Showing the settings
    let summary = show_settings(&ctx).await;

    // THEN: Length only, never the value
    assert!(!summary.contains(TEST_API_KEY));
    assert!(summary.contains(&format!("set ({} chars)", TEST_API_KEY.len())));
    assert!(summary.contains("Translate to: English"));

    // AND: One line per setting
    assert_eq!(summary.lines().count(), 3);
    assert!(summary.ends_with('\n'));
}
