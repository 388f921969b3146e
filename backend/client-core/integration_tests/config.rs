use client_core::config::{API_KEY_ENV_VAR, AppSettings};
use client_core::error::ConfigError;

use serial_test::serial;
use tempfile::tempdir;

/// **VALUE**: Verifies that a fresh install starts from defaults.
///
/// **WHY THIS MATTERS**: The first run has no settings file; it must not error.
///
/// **BUG THIS CATCHES**: Would catch `load` failing on a missing file.
#[test]
fn given_missing_file_when_loading_then_returns_defaults() {
    let dir = tempdir().unwrap();

    let settings = AppSettings::load(dir.path()).expect("defaults");

    assert_eq!(settings.rapid_api_key, "");
    assert_eq!(settings.translate_to, "English");
    assert_eq!(settings.endpoint_url, client_core::RAPID_AI_ENDPOINT_URL);
}

/// **VALUE**: Verifies save followed by load returns the same values.
///
/// **WHY THIS MATTERS**: The key and target language must survive restarts.
///
/// **BUG THIS CATCHES**: Would catch the atomic rename writing to the wrong path.
#[test]
fn given_saved_settings_when_loaded_then_values_persist() {
    let dir = tempdir().unwrap();
    let settings = AppSettings {
        rapid_api_key: String::from("persisted-key"),
        translate_to: String::from("German"),
        ..AppSettings::default()
    };

    settings.save(dir.path()).expect("save");
    let loaded = AppSettings::load(dir.path()).expect("load");

    assert_eq!(loaded.rapid_api_key, "persisted-key");
    assert_eq!(loaded.translate_to, "German");
    assert!(!dir.path().join("settings.json.tmp").exists());
}

/// **VALUE**: Verifies that a partial file fills the gaps with defaults.
///
/// **WHY THIS MATTERS**: Older settings files only stored the key and language.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]`.
#[test]
fn given_partial_file_when_loading_then_missing_fields_default() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"rapid_api_key": "abc"}"#,
    )
    .unwrap();

    let loaded = AppSettings::load(dir.path()).expect("load");

    assert_eq!(loaded.rapid_api_key, "abc");
    assert_eq!(loaded.translate_to, "English");
    assert_eq!(loaded.version, 1);
}

/// **VALUE**: Verifies that a corrupt file is reported, not silently replaced.
///
/// **WHY THIS MATTERS**: Overwriting a corrupt file with defaults would lose the user's key.
///
/// **BUG THIS CATCHES**: Would catch parse errors being swallowed.
#[test]
fn given_corrupt_file_when_loading_then_returns_parse_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();

    let result = AppSettings::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies validation on save.
///
/// **WHY THIS MATTERS**: An empty target language or a non-HTTP endpoint breaks every later
/// call; better to refuse the write.
///
/// **BUG THIS CATCHES**: Would catch `save` skipping `validate`.
#[test]
fn given_invalid_settings_when_saving_then_returns_validation_error() {
    let dir = tempdir().unwrap();
    let empty_language = AppSettings {
        translate_to: String::from("  "),
        ..AppSettings::default()
    };
    let bad_endpoint = AppSettings {
        endpoint_url: String::from("ftp://example.com"),
        ..AppSettings::default()
    };

    assert!(matches!(
        empty_language.save(dir.path()),
        Err(ConfigError::ValidationError { .. })
    ));
    assert!(matches!(
        bad_endpoint.save(dir.path()),
        Err(ConfigError::ValidationError { .. })
    ));
    assert!(!dir.path().join("settings.json").exists());
}

/// **VALUE**: Verifies that Debug output hides the key.
///
/// **WHY THIS MATTERS**: Settings are logged at debug level on startup.
///
/// **BUG THIS CATCHES**: Would catch `#[derive(Debug)]` replacing the manual impl.
#[test]
fn given_settings_with_key_when_debug_formatted_then_key_hidden() {
    let settings = AppSettings {
        rapid_api_key: String::from("very-secret"),
        ..AppSettings::default()
    };

    let debug = format!("{settings:?}");

    assert!(!debug.contains("very-secret"));
    assert!(debug.contains("English"));
}

/// **VALUE**: Verifies the environment fallback for an unset key.
///
/// **WHY THIS MATTERS**: Headless setups provide the key through the environment.
///
/// **BUG THIS CATCHES**: Would catch the override clobbering a stored key.
#[test]
#[serial]
fn given_env_key_when_override_applied_then_only_empty_key_is_replaced() {
    // SAFETY: serialized with other environment-mutating tests
    unsafe { std::env::set_var(API_KEY_ENV_VAR, "from-env") };

    let mut empty = AppSettings::default();
    let mut stored = AppSettings {
        rapid_api_key: String::from("stored"),
        ..AppSettings::default()
    };

    assert!(empty.apply_env_override());
    assert!(!stored.apply_env_override());
    assert_eq!(empty.rapid_api_key, "from-env");
    assert_eq!(stored.rapid_api_key, "stored");

    unsafe { std::env::remove_var(API_KEY_ENV_VAR) };
}

/// **VALUE**: Verifies that no override happens without the variable.
///
/// **WHY THIS MATTERS**: An empty key must stay empty so the missing-key dialog shows.
///
/// **BUG THIS CATCHES**: Would catch a stale or empty variable being applied.
#[test]
#[serial]
fn given_no_env_key_when_override_applied_then_key_stays_empty() {
    unsafe { std::env::remove_var(API_KEY_ENV_VAR) };

    let mut settings = AppSettings::default();

    assert!(!settings.apply_env_override());
    assert!(settings.credential().is_blank());
}

#[test]
fn given_language_names_when_looked_up_then_listed_spelling_returned() {
    assert_eq!(AppSettings::supported_language("french"), Some("French"));
    assert_eq!(AppSettings::supported_language(" English "), Some("English"));
    assert_eq!(AppSettings::supported_language("Klingon"), None);
}
