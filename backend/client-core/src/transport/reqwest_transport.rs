use crate::error::TransportError;
use crate::transport::{Transport, TransportRequest};

use std::time::Duration;

use log::{debug, trace};
use reqwest::Client;
use serde_json::Value;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        let TransportRequest {
            url,
            method,
            headers,
            body,
        } = request;

        trace!("{method} {url}");

        let mut builder = self.client.request(method, url).body(serde_json::to_vec(&body)?);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Completion service answered HTTP {}", status.as_u16());
            return Err(TransportError::from_http_response(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let text = response.text().await?;
        let json: Value = serde_json::from_str(&text)?;

        Ok(json)
    }
}
