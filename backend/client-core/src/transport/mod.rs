//! HTTP request/response primitive the dispatcher and validator run on.
//!
//! The [`Transport`] trait is the seam between the classification logic and
//! the network. Production code uses [`ReqwestTransport`]; hosts with their
//! own HTTP stack implement the trait and report failures through
//! [`TransportError`](crate::error::TransportError).

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::RAPID_API_KEY_HEADER;
use crate::error::TransportError;

use common::RedactedApiKey;

use std::future::Future;
use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use url::Url;

const CONTENT_TYPE_HEADER_KEY: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// A single outbound call.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl TransportRequest {
    /// JSON POST to `url` with the credential attached as the gateway key header.
    pub fn post_json(url: Url, credential: &RedactedApiKey, body: Value) -> Self {
        Self {
            url,
            method: Method::POST,
            headers: vec![
                (
                    String::from(CONTENT_TYPE_HEADER_KEY),
                    String::from(JSON_CONTENT_TYPE),
                ),
                (
                    String::from(RAPID_API_KEY_HEADER),
                    credential.as_str().to_string(),
                ),
            ],
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends a request and returns the decoded JSON body of a successful response.
///
/// Any failure, including non-2xx statuses and undecodable bodies, is a
/// [`TransportError`].
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send {
        self.as_ref().send(request)
    }
}
