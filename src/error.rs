//! Error types for the moodmapper library.
//!
//! Every fallible library operation returns [`Result`], whose error side is
//! the [`MoodError`] enum. The binary wraps these in `anyhow` at the edges.

use std::io;

use thiserror::Error;

/// The main error type for moodmapper operations.
#[derive(Error, Debug)]
pub enum MoodError {
    /// Rejected input: bad language selector, unknown label, out-of-range value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (reading input, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// External sentiment classifier failed or produced garbage
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Text extraction from a document (PDF) failed
    #[error("Extraction error: {0}")]
    Extraction(String),
}

/// Result type alias for operations that may fail with MoodError.
pub type Result<T> = std::result::Result<T, MoodError>;

impl MoodError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MoodError::InvalidArgument(msg.into())
    }

    /// Create a new classifier error.
    pub fn classifier<S: Into<String>>(msg: S) -> Self {
        MoodError::Classifier(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        MoodError::Extraction(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = MoodError::invalid_argument("unsupported language: fr");
        assert_eq!(err.to_string(), "Invalid argument: unsupported language: fr");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: MoodError = io_err.into();
        assert!(matches!(err, MoodError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
