//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running pomo.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration file or value problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup or teardown failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Serialization failure.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
