//! Error types for Lumen.

use thiserror::Error;

/// Main error type for Lumen operations.
#[derive(Error, Debug)]
pub enum LumenError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Effect error: {0}")]
    Effect(String),
}

/// Result type alias for Lumen operations.
pub type Result<T> = std::result::Result<T, LumenError>;
