//! Outcome of every completion-service operation.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Closed set of outcomes a dispatch or key validation can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultStatus {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "internetDisconnected")]
    InternetDisconnected,
    #[serde(rename = "exceededQuota")]
    ExceededQuota,
    #[serde(rename = "invalidAPIKey")]
    InvalidApiKey,
    #[serde(rename = "emptyAPIKey")]
    EmptyApiKey,
    #[serde(rename = "emptyPrompt")]
    EmptyPrompt,
    #[serde(rename = "userUnsubscribed")]
    UserUnsubscribed,
    #[serde(rename = "unknownError")]
    UnknownError,
}

impl ResultStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ResultStatus::Success)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultStatus::Success => "success",
            ResultStatus::InternetDisconnected => "internet disconnected",
            ResultStatus::ExceededQuota => "exceeded quota",
            ResultStatus::InvalidApiKey => "invalid API key",
            ResultStatus::EmptyApiKey => "empty API key",
            ResultStatus::EmptyPrompt => "empty prompt",
            ResultStatus::UserUnsubscribed => "user unsubscribed",
            ResultStatus::UnknownError => "unknown error",
        };
        f.write_str(name)
    }
}

/// Immutable `(status, body)` pair.
///
/// The body is only ever non-empty for [`ResultStatus::Success`]; the
/// constructors are the only way to build one, so the invariant holds for
/// every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    status: ResultStatus,
    body: String,
}

impl CompletionResult {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Success,
            body: body.into(),
        }
    }

    /// A result carrying `status` and an empty body.
    pub fn failure(status: ResultStatus) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    pub fn empty_api_key() -> Self {
        Self::failure(ResultStatus::EmptyApiKey)
    }

    pub fn empty_prompt() -> Self {
        Self::failure(ResultStatus::EmptyPrompt)
    }

    pub fn status(&self) -> ResultStatus {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
