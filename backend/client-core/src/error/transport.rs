//! Errors raised at the transport boundary.
//!
//! Key design decisions:
//! - HTTP status codes stored directly (not parsed from strings)
//! - `kind()` gives classification a closed enum to match on
//! - `from_message()` is the single place free text is inspected, for hosts
//!   that only surface an error string
//! - All errors include ErrorLocation for debugging

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

/// Coarse category of a transport failure, ordered by classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    NetworkUnreachable,
    RateLimited,
    Forbidden,
    Other,
}

#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("Disconnected Error: {message} {location}")]
    Disconnected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate Limited Error: HTTP {status_code} - {message} {location}")]
    RateLimited {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden Error: HTTP {status_code} - {message} {location}")]
    Forbidden {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Other {
        status_code: Option<HttpStatusCode>,
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    #[track_caller]
    pub fn disconnected(message: impl Into<String>) -> Self {
        TransportError::Disconnected {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn other(message: impl Into<String>) -> Self {
        TransportError::Other {
            status_code: None,
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Classify an opaque error string.
    ///
    /// Case-insensitive; first match wins in the order
    /// "disconnected", "429", "403".
    #[track_caller]
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        let location = ErrorLocation::caller();

        if lower.contains("disconnected") {
            TransportError::Disconnected { message, location }
        } else if lower.contains("429") {
            TransportError::RateLimited {
                status_code: HttpStatusCode::TOO_MANY_REQUESTS,
                message,
                location,
            }
        } else if lower.contains("403") {
            TransportError::Forbidden {
                status_code: HttpStatusCode::FORBIDDEN,
                message,
                location,
            }
        } else {
            TransportError::Other {
                status_code: None,
                message,
                location,
            }
        }
    }

    /// Create from HTTP response with explicit status code.
    #[track_caller]
    pub fn from_http_response(status_code: u16, body: impl Into<String>) -> Self {
        let status_code = HttpStatusCode(status_code);
        let message = format!("Request failed, status {status_code}: {}", body.into());
        let location = ErrorLocation::caller();

        if status_code.is_rate_limited() {
            TransportError::RateLimited {
                status_code,
                message,
                location,
            }
        } else if status_code.is_forbidden() {
            TransportError::Forbidden {
                status_code,
                message,
                location,
            }
        } else {
            TransportError::Other {
                status_code: Some(status_code),
                message,
                location,
            }
        }
    }

    /// Create from reqwest error with proper categorization.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        // Check for specific error types BEFORE converting to string
        if error.is_connect() {
            return TransportError::Disconnected {
                message: error.to_string(),
                location: ErrorLocation::caller(),
            };
        }

        if let Some(status) = error.status() {
            return TransportError::from_http_response(status.as_u16(), error.to_string());
        }

        TransportError::Other {
            status_code: None,
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }

    pub fn kind(&self) -> TransportErrorKind {
        match self {
            TransportError::Disconnected { .. } => TransportErrorKind::NetworkUnreachable,
            TransportError::RateLimited { .. } => TransportErrorKind::RateLimited,
            TransportError::Forbidden { .. } => TransportErrorKind::Forbidden,
            TransportError::Other { .. } => TransportErrorKind::Other,
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::RateLimited { status_code, .. }
            | TransportError::Forbidden { status_code, .. } => Some(status_code.0),
            TransportError::Other { status_code, .. } => status_code.map(|s| s.0),
            TransportError::Disconnected { .. } => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        TransportError::from_reqwest(&error)
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        TransportError::other(format!("JSON Error: {error}"))
    }
}
