//! Outbound completion request.

pub mod builder;

use crate::ChatMessage;

use common::RedactedApiKey;

use serde::Serialize;

/// A single completion call: credential, system message and user messages.
///
/// Built fresh per call by [`builder::CompletionRequestBuilder`], sent once
/// and dropped. Never persisted.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub(crate) credential: RedactedApiKey,
    pub(crate) system_message: String,
    pub(crate) user_messages: Vec<String>,
}

/// Wire body of a completion call: `{model, prompts}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionPayload<'a> {
    pub model: &'a str,
    pub prompts: Vec<ChatMessage>,
}

impl CompletionRequest {
    pub fn credential(&self) -> &RedactedApiKey {
        &self.credential
    }

    pub fn system_message(&self) -> &str {
        &self.system_message
    }

    pub fn user_messages(&self) -> &[String] {
        &self.user_messages
    }

    /// Ordered message sequence: the system message followed by every user message.
    pub fn messages(&self) -> Vec<ChatMessage> {
        std::iter::once(ChatMessage::system(self.system_message.as_str()))
            .chain(self.user_messages.iter().map(|m| ChatMessage::user(m.as_str())))
            .collect()
    }

    pub fn payload<'a>(&self, model: &'a str) -> CompletionPayload<'a> {
        CompletionPayload {
            model,
            prompts: self.messages(),
        }
    }
}
