//! Completion requests: build, send once, classify.

use crate::classify::classify_failure;
use crate::prompt::PromptShape;
use crate::transport::{Transport, TransportRequest};
use crate::COMPLETION_MODEL;

use common::RedactedApiKey;
use models::{CompletionResult, QuickAction, ResultStatus};

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use log::{debug, error, warn};
use serde_json::Value;
use url::Url;

const COMPLETION_CONTENT_POINTER: &str = "/choices/0/message/content";

/// Turns user input into exactly one [`CompletionResult`].
///
/// Every path, including transport failures, resolves to a result value; the
/// dispatcher never returns an error and never retries.
#[derive(Clone)]
pub struct RequestDispatcher<T> {
    transport: T,
    endpoint: Url,
    model: String,
}

impl<T: Transport> RequestDispatcher<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
            model: String::from(COMPLETION_MODEL),
        }
    }

    /// Send `prompt`, optionally with the selected text and a system instruction.
    ///
    /// The credential is read per call; a blank one yields
    /// [`ResultStatus::EmptyApiKey`] without touching the network.
    pub async fn dispatch(
        &self,
        credential: &RedactedApiKey,
        prompt: &str,
        selected_text: Option<&str>,
        system_instruction: Option<&str>,
    ) -> CompletionResult {
        self.dispatch_at(
            credential,
            prompt,
            selected_text,
            system_instruction,
            Local::now(),
        )
        .await
    }

    /// Apply a quick action to `selection`.
    pub async fn quick_action(
        &self,
        credential: &RedactedApiKey,
        selection: &str,
        action: &QuickAction,
    ) -> CompletionResult {
        let instruction = action.instruction();
        debug!("Running quick action '{}'", action.name());
        self.dispatch(credential, "", Some(selection), Some(&instruction))
            .await
    }

    /// [`dispatch`](Self::dispatch) with an explicit timestamp for the system message.
    pub async fn dispatch_at<Tz>(
        &self,
        credential: &RedactedApiKey,
        prompt: &str,
        selected_text: Option<&str>,
        system_instruction: Option<&str>,
        now: DateTime<Tz>,
    ) -> CompletionResult
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if credential.is_blank() {
            debug!("Empty API key, completion not sent");
            return CompletionResult::empty_api_key();
        }

        let shape = PromptShape::resolve(prompt, selected_text, system_instruction);
        let request = match shape.build_request(credential, &now) {
            Ok(request) => request,
            Err(e) => {
                error!("Failed to build completion request: {e}");
                return CompletionResult::failure(ResultStatus::UnknownError);
            }
        };

        let body = match serde_json::to_value(request.payload(&self.model)) {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to encode completion request: {e}");
                return CompletionResult::failure(ResultStatus::UnknownError);
            }
        };

        debug!(
            "Sending {} completion request ({} messages, key {} chars)",
            shape.name(),
            request.user_messages().len() + 1,
            credential.len()
        );

        let outbound = TransportRequest::post_json(self.endpoint.clone(), credential, body);
        match self.transport.send(outbound).await {
            Ok(json) => CompletionResult::success(extract_content(&json)),
            Err(e) => {
                let status = classify_failure(e.kind(), ResultStatus::UnknownError);
                warn!("Completion request failed ({status}): {e}");
                CompletionResult::failure(status)
            }
        }
    }
}

/// Text of the first choice, or empty when the response lacks it.
fn extract_content(json: &Value) -> String {
    match json
        .pointer(COMPLETION_CONTENT_POINTER)
        .and_then(Value::as_str)
    {
        Some(content) => content.to_string(),
        None => {
            warn!("Completion response has no choices[0].message.content, returning empty body");
            String::new()
        }
    }
}
