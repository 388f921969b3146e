//! Command context pointed at a mock completion endpoint.

use client_core::{AppSettings, ReqwestTransport};

use rapid_ai::commands::CommandContext;
use rapid_ai::state::SettingsState;

use std::time::Duration;

use tempfile::TempDir;
use url::Url;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "cli-test-key-42";

/// Context with `settings` stored in a fresh temp dir.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn context(
    server: &MockServer,
    settings: AppSettings,
) -> (CommandContext<ReqwestTransport>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let endpoint = Url::parse(&format!("{}/", server.uri())).expect("mock server uri");
    let transport =
        ReqwestTransport::with_timeout(Duration::from_secs(5)).expect("Failed to build transport");
    let state = SettingsState::new(settings, dir.path().to_path_buf());
    (CommandContext::new(state, transport, endpoint), dir)
}

pub fn settings_with_key() -> AppSettings {
    AppSettings {
        rapid_api_key: TEST_API_KEY.to_string(),
        ..AppSettings::default()
    }
}
