pub mod classify;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod key_validator;
pub mod prompt;
pub mod transport;

#[cfg(test)]
mod tests;

pub use config::AppSettings;
pub use dispatcher::RequestDispatcher;
pub use key_validator::KeyValidator;
pub use transport::{ReqwestTransport, Transport, TransportRequest};

pub const RAPID_AI_HOST: &str = "obsidian-ai.p.rapidapi.com";
pub const RAPID_AI_ENDPOINT_URL: &str = const_format::concatcp!("https://", RAPID_AI_HOST, "/");
pub const RAPID_API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";
