//! Error types for srcsift.

use thiserror::Error;

/// srcsift error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid exclusion pattern: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for srcsift operations.
pub type Result<T> = std::result::Result<T, Error>;
