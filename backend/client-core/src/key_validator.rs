//! Credential check against the completion endpoint.

use crate::classify::classify_failure;
use crate::transport::{Transport, TransportRequest};

use common::RedactedApiKey;
use models::{CompletionResult, ResultStatus};

use log::{debug, info, warn};
use serde_json::{Value, json};
use url::Url;

const VALIDITY_FIELD: &str = "valid";

/// Pings the endpoint with an `invokeKey` marker to check a credential.
///
/// Unrecognized failures mean [`ResultStatus::InvalidApiKey`] here, where a
/// completion would report [`ResultStatus::UnknownError`].
#[derive(Clone)]
pub struct KeyValidator<T> {
    transport: T,
    endpoint: Url,
}

impl<T: Transport> KeyValidator<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    pub async fn validate(&self, credential: &RedactedApiKey) -> CompletionResult {
        if credential.is_blank() {
            debug!("Empty API key, validation not sent");
            return CompletionResult::empty_api_key();
        }

        debug!("Validating API key ({} chars)", credential.len());

        let request = TransportRequest::post_json(
            self.endpoint.clone(),
            credential,
            json!({"invokeKey": true}),
        );

        match self.transport.send(request).await {
            Ok(body) => {
                if body.get(VALIDITY_FIELD).and_then(Value::as_bool) == Some(true) {
                    info!("API key accepted by completion service");
                    CompletionResult::success("")
                } else {
                    info!("API key rejected by completion service");
                    CompletionResult::failure(ResultStatus::InvalidApiKey)
                }
            }
            Err(e) => {
                let status = classify_failure(e.kind(), ResultStatus::InvalidApiKey);
                warn!("API key validation failed ({status}): {e}");
                CompletionResult::failure(status)
            }
        }
    }
}
