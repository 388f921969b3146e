//! Shared primitives for Rapid AI.
//!
//! Everything here is domain-agnostic plumbing used by the other crates:
//!
//! - [`ErrorLocation`]: file/line/column captured via `#[track_caller]` and
//!   embedded in every error variant across the workspace.
//! - [`RedactedApiKey`]: the completion-service credential, never printed.
//! - [`HttpStatusCode`]: typed status codes so callers match on numbers, not
//!   on error message text.

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
