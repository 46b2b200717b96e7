//! Common error types used throughout pixelforged.
//!
//! This module provides a unified error type that covers the failure cases
//! of the conversion pipeline: I/O, decoding, encoding, and invalid input.

/// Common error type for pixelforged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An image could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// An image could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new Decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new Encode error.
    pub fn encode<S: Into<String>>(msg: S) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
