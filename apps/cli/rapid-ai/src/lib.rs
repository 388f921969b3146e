// Library exports for testing
// The binary (main.rs) imports these as well

pub mod commands;
pub mod error;
pub mod logger;
pub mod presentation;
pub mod state;
pub mod terminal;

#[cfg(test)]
mod tests;

/// Directory name under the platform config/data roots.
pub const APP_DIR_NAME: &str = "rapid-ai";
