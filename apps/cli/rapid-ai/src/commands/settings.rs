use crate::commands::CommandContext;
use crate::error::RapidAiError;
use crate::presentation::{KeyTestSurface, run_key_test};
use crate::state::SettingsCommand;

use client_core::{AppSettings, Transport};
use client_core::config::SUPPORTED_LANGUAGES;

use common::RedactedApiKey;
use models::ResultStatus;

use log::info;

/// Test `key`, or the stored key when none is given, on `surface`.
pub async fn test_key<T, S>(
    ctx: &CommandContext<T>,
    surface: &mut S,
    key: Option<&str>,
) -> ResultStatus
where
    T: Transport,
    S: KeyTestSurface + ?Sized,
{
    let credential = match key {
        Some(key) => RedactedApiKey::new(key),
        None => ctx.state.credential().await,
    };
    run_key_test(surface, &ctx.validator, &credential).await
}

/// Store a new API key.
pub async fn set_key<T>(ctx: &CommandContext<T>, key: &str) -> Result<(), RapidAiError> {
    if key.trim().is_empty() {
        return Err(RapidAiError::input("API key cannot be empty"));
    }
    ctx.state
        .update(SettingsCommand::SetCredential(key.to_string()))
        .await
}

/// Set the translation target, returning the language as it is stored.
///
/// Matching is case-insensitive; the stored spelling is the listed one.
pub async fn set_language<T>(
    ctx: &CommandContext<T>,
    language: &str,
) -> Result<&'static str, RapidAiError> {
    let language = AppSettings::supported_language(language)
        .ok_or_else(|| RapidAiError::input(format!("Unsupported language: {language}")))?;

    ctx.state
        .update(SettingsCommand::SetTranslateTo(language.to_string()))
        .await?;

    info!("Translation language set to {language}");
    Ok(language)
}

/// Human-readable settings summary. The key itself is never shown.
pub async fn show_settings<T>(ctx: &CommandContext<T>) -> String {
    let settings = ctx.state.snapshot().await;
    let credential = settings.credential();

    let key = if credential.is_blank() {
        String::from("not set")
    } else {
        format!("set ({} chars)", credential.len())
    };

    format!(
        "API key:      {key}\nTranslate to: {}\nEndpoint:     {}\n",
        settings.translate_to, settings.endpoint_url
    )
}

pub fn languages() -> &'static [&'static str] {
    SUPPORTED_LANGUAGES
}
