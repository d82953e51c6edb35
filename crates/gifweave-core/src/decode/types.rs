//! Core types for sequence decoding.

use thiserror::Error;

/// Error types for decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source file does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// The content is not a recognized image format.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The file was recognized but no frame could be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupt(String),

    /// I/O error other than a missing file.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
            image::ImageError::IoError(e) => DecodeError::Io(e.to_string()),
            other => DecodeError::Corrupt(other.to_string()),
        }
    }
}
