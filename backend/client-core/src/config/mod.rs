//! Persistent extension settings.
//!
//! Stored as `settings.json` in the host's config directory. The credential is
//! kept as plain text in the file (the host owns its protection) but is only
//! handed out wrapped in a [`RedactedApiKey`].

use crate::RAPID_AI_ENDPOINT_URL;
use crate::error::ConfigError;

use common::{ErrorLocation, RedactedApiKey};

use std::fmt;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const SETTINGS_FILE_NAME: &str = "settings.json";
const SETTINGS_VERSION: u32 = 1;

/// Environment variable consulted when no key is stored.
pub const API_KEY_ENV_VAR: &str = "RAPID_AI_API_KEY";

/// Translation targets offered by the settings panels.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "Arabic",
    "Bengali",
    "Chinese",
    "Dutch",
    "English",
    "French",
    "German",
    "Greek",
    "Hindi",
    "Indonesian",
    "Italian",
    "Japanese",
    "Korean",
    "Persian",
    "Polish",
    "Portuguese",
    "Russian",
    "Spanish",
    "Swedish",
    "Thai",
    "Turkish",
    "Ukrainian",
    "Urdu",
    "Vietnamese",
];

#[derive(Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub rapid_api_key: String,

    #[serde(default = "default_translate_to")]
    pub translate_to: String,

    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            rapid_api_key: String::new(),
            translate_to: default_translate_to(),
            endpoint_url: default_endpoint_url(),
        }
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("version", &self.version)
            .field("rapid_api_key", &RedactedApiKey::new(self.rapid_api_key.as_str()))
            .field("translate_to", &self.translate_to)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}
fn default_translate_to() -> String {
    "English".to_string()
}
fn default_endpoint_url() -> String {
    RAPID_AI_ENDPOINT_URL.to_string()
}

impl AppSettings {
    /// Load settings from {config_dir}/settings.json.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file is missing.
    /// Returns `Err(ConfigError)` if the file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let settings_path = config_dir.join(SETTINGS_FILE_NAME);

        if !settings_path.exists() {
            info!(
                "Settings file not found at {}, using defaults",
                settings_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            warn!("Failed to read settings file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: settings_path.clone(),
                source: e,
            }
        })?;

        let settings: AppSettings = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse settings JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: settings_path.clone(),
                reason: e.to_string(),
            }
        })?;

        settings.validate()?;

        info!("Settings loaded from {}", settings_path.display());
        Ok(settings)
    }

    /// Save settings to {config_dir}/settings.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let settings_path = config_dir.join(SETTINGS_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", SETTINGS_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::caller(),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &settings_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: settings_path.clone(),
            source: e,
        })?;

        info!("Settings saved to {}", settings_path.display());
        Ok(())
    }

    /// Validate settings values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > SETTINGS_VERSION {
            return Err(ConfigError::validation(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, SETTINGS_VERSION
            )));
        }

        if self.translate_to.trim().is_empty() {
            return Err(ConfigError::validation("translate_to cannot be empty"));
        }

        if !self.endpoint_url.starts_with("http://") && !self.endpoint_url.starts_with("https://")
        {
            return Err(ConfigError::validation(format!(
                "Invalid endpoint URL format: {}",
                self.endpoint_url
            )));
        }

        Ok(())
    }

    /// The stored credential, wrapped for transmission.
    pub fn credential(&self) -> RedactedApiKey {
        RedactedApiKey::new(self.rapid_api_key.as_str())
    }

    /// Fill an empty stored key from [`API_KEY_ENV_VAR`].
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// A key already stored in the settings always wins.
    ///
    /// Returns `true` when the key was taken from the environment.
    pub fn apply_env_override(&mut self) -> bool {
        if !self.rapid_api_key.trim().is_empty() {
            return false;
        }

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded .env from: {:?}", path);
        }

        match std::env::var(API_KEY_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => {
                info!(
                    "Using API key from {} ({} chars)",
                    API_KEY_ENV_VAR,
                    value.len()
                );
                self.rapid_api_key = value;
                true
            }
            Ok(_) => false,
            Err(std::env::VarError::NotPresent) => false,
            Err(std::env::VarError::NotUnicode(_)) => {
                warn!("Env var {} contains invalid unicode", API_KEY_ENV_VAR);
                false
            }
        }
    }

    /// The listed spelling of `language`, matched case-insensitively.
    pub fn supported_language(language: &str) -> Option<&'static str> {
        let language = language.trim();
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|supported| supported.eq_ignore_ascii_case(language))
    }
}
