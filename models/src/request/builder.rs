use crate::error::model_error::ModelError;
use crate::request::CompletionRequest;

use common::RedactedApiKey;

/// Builder for creating validated CompletionRequest instances.
///
/// User messages are kept in the order they are added.
#[derive(Debug, Default)]
pub struct CompletionRequestBuilder {
    credential: Option<RedactedApiKey>,
    system_message: Option<String>,
    user_messages: Vec<String>,
}

impl CompletionRequestBuilder {
    pub fn with_credential(mut self, credential: RedactedApiKey) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn with_system_message(mut self, message: impl Into<String>) -> Self {
        self.system_message = Some(message.into());
        self
    }

    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        self.user_messages.push(message.into());
        self
    }

    /// Build the CompletionRequest with validation.
    #[track_caller]
    pub fn build(self) -> Result<CompletionRequest, ModelError> {
        let credential = self
            .credential
            .ok_or_else(|| ModelError::validation("Credential is required"))?;

        if credential.is_blank() {
            return Err(ModelError::validation("Credential cannot be blank"));
        }

        let system_message = self
            .system_message
            .ok_or_else(|| ModelError::validation("System message is required"))?;

        if system_message.trim().is_empty() {
            return Err(ModelError::validation("System message cannot be empty"));
        }

        if self.user_messages.is_empty() {
            return Err(ModelError::validation(
                "At least one user message is required",
            ));
        }

        Ok(CompletionRequest {
            credential,
            system_message,
            user_messages: self.user_messages,
        })
    }
}
