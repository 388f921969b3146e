//! Domain models for Rapid AI.
//!
//! This crate contains pure data structures representing the core
//! concepts of the extension. Models have no I/O - they're just data that
//! can be passed between layers.
//!
//! ## Architecture
//!
//! - **common**: Credential, status code and error-location primitives
//! - **models** (this crate): Results, chat messages and completion requests
//! - **client-core**: Request dispatch, key validation and settings
//! - **rapid-ai**: Terminal host wiring everything together

pub mod error;
pub mod message;
pub mod quick_action;
pub mod request;
pub mod result;

#[cfg(test)]
mod tests;

pub use error::model_error::ModelError;
pub use message::{ChatMessage, ChatRole};
pub use quick_action::QuickAction;
pub use request::builder::CompletionRequestBuilder;
pub use request::{CompletionPayload, CompletionRequest};
pub use result::{CompletionResult, ResultStatus};
