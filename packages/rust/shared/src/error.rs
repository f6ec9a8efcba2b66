//! Error types for profilegen.
//!
//! Library crates use [`ProfileGenError`] via `thiserror`.
//! The cli app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all profilegen operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileGenError {
    /// Configuration or settings loading error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error during a remote lookup.
    #[error("network error: {0}")]
    Network(String),

    /// A remote resource answered, but the thing asked for does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed JSON or other unparseable payload.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input rejected by a validation rule.
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ProfileGenError>;

impl ProfileGenError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
