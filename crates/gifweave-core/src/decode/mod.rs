//! Decoding pipeline for gifweave.
//!
//! This module provides functionality for:
//! - Decoding animated GIFs into full-canvas RGBA frames with per-frame timing
//! - Decoding single still images (PNG, JPEG, BMP, TIFF, WebP, GIF)
//!
//! # Format Detection
//!
//! Formats are sniffed from the file content, never from the extension.
//! GIF content goes through the animated path; any other format the `image`
//! crate recognizes becomes a one-frame sequence.
//!
//! # Timing
//!
//! GIF delays are stored in centiseconds. A frame with no delay inherits the
//! first delay found in the file, or 100ms when the file has none.

mod animated;
mod still;
mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use image::ImageFormat;

pub use still::decode_still;
pub use types::DecodeError;

use crate::sequence::FrameSequence;

/// Decode an animated image from bytes.
///
/// # Errors
///
/// - `DecodeError::UnsupportedFormat` if the content is not a known image format
/// - `DecodeError::Corrupt` if no frame could be decoded
pub fn decode_sequence(bytes: &[u8]) -> Result<FrameSequence, DecodeError> {
    match still::sniff_format(bytes) {
        Some(ImageFormat::Gif) => animated::decode_gif(bytes),
        Some(_) => {
            let frame = decode_still(bytes)?;
            tracing::debug!(
                width = frame.width,
                height = frame.height,
                "decoded still as single-frame sequence"
            );
            Ok(FrameSequence::still(frame))
        }
        None => Err(DecodeError::UnsupportedFormat),
    }
}

/// Read and decode an animated image file.
pub fn decode_sequence_file(path: impl AsRef<Path>) -> Result<FrameSequence, DecodeError> {
    let bytes = read_file(path.as_ref())?;
    decode_sequence(&bytes)
}

/// Read and decode a still image file.
pub fn decode_still_file(path: impl AsRef<Path>) -> Result<crate::sequence::Frame, DecodeError> {
    let bytes = read_file(path.as_ref())?;
    decode_still(&bytes)
}

fn read_file(path: &Path) -> Result<Vec<u8>, DecodeError> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecodeError::NotFound(path.display().to_string()),
        _ => DecodeError::Io(e.to_string()),
    })
}
