use client_core::error::ConfigError;

use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors raised by the host around the core operations.
///
/// Core operations themselves never fail; they return a `CompletionResult`.
/// These errors cover startup, settings persistence and local input.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RapidAiError {
    /// Error from this App
    #[error("Rapid AI Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Settings could not be read, validated or written
    #[error("Settings Error: {message} {location}")]
    Settings {
        message: String,
        location: ErrorLocation,
    },

    /// The settings actor is gone
    #[error("State Error: {message} {location}")]
    State {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected command-line input
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },
}

impl RapidAiError {
    #[track_caller]
    pub fn app(message: impl Into<String>) -> Self {
        RapidAiError::App {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn state(message: impl Into<String>) -> Self {
        RapidAiError::State {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        RapidAiError::Input {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<ConfigError> for RapidAiError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        RapidAiError::Settings {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
