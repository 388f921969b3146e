//! Test helpers for HTTP integration tests.
//!
//! Provides a mock completion endpoint and clients pointed at it.

use client_core::{KeyValidator, RequestDispatcher, ReqwestTransport};

use std::net::TcpListener;
use std::time::Duration;

use url::Url;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key-12345";

/// Endpoint URL of a running mock server.
pub fn endpoint_of(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.uri())).expect("mock server uri")
}

/// Endpoint on a local port nothing listens on.
pub fn unreachable_endpoint() -> Url {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("Failed to reserve a local port")
        .port();
    Url::parse(&format!("http://127.0.0.1:{port}/")).expect("valid url")
}

pub fn transport() -> ReqwestTransport {
    ReqwestTransport::with_timeout(Duration::from_secs(5)).expect("Failed to build transport")
}

pub fn dispatcher(endpoint: Url) -> RequestDispatcher<ReqwestTransport> {
    RequestDispatcher::new(transport(), endpoint)
}

pub fn validator(endpoint: Url) -> KeyValidator<ReqwestTransport> {
    KeyValidator::new(transport(), endpoint)
}
