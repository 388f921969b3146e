pub mod config;
pub mod transport;

pub use config::ConfigError;
pub use transport::{TransportError, TransportErrorKind};
