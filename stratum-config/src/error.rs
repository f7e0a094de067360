//! Decode error types

use thiserror::Error;

/// Boxed cause attached to decode failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for processor operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while decoding raw configuration bytes.
///
/// Missing optional sources are not represented here; a store marked
/// optional that cannot be read contributes nothing and is not an error.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input parsed, but does not have the required shape
    #[error("invalid {format} configuration: {message}")]
    Structure {
        format: &'static str,
        message: String,
    },

    /// The parser rejected the input
    #[error("failed to parse {format} configuration")]
    Parse {
        format: &'static str,
        #[source]
        source: BoxError,
    },

    /// The background decode unit did not complete
    #[error("{format} decode task failed")]
    Task {
        format: &'static str,
        #[source]
        source: BoxError,
    },
}
