//! PNG encoding for decomposed stills.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{write_atomic, EncodeError};
use crate::ops::still_file_name;
use crate::sequence::Frame;

/// Encode a frame as PNG bytes (RGBA, 8 bits per channel).
///
/// # Errors
///
/// Returns `EncodeError::EncodingFailed` if the pixel buffer doesn't match
/// the frame dimensions or the encoder fails.
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, EncodeError> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.pixels.len() != expected {
        return Err(EncodeError::EncodingFailed(format!(
            "frame buffer holds {} bytes, expected {}",
            frame.pixels.len(),
            expected
        )));
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&frame.pixels, frame.width, frame.height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a frame as PNG and write it to `path`.
pub fn write_png(frame: &Frame, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let bytes = encode_png(frame)?;
    write_atomic(path.as_ref(), &bytes)
}

/// Write labeled stills as `{base_name}_{label}.png` inside `dir`.
///
/// `dir` is created if needed. Returns the written paths in input order.
pub fn write_stills(
    stills: &[(String, Frame)],
    dir: impl AsRef<Path>,
    base_name: &str,
) -> Result<Vec<PathBuf>, EncodeError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(stills.len());
    for (label, frame) in stills {
        let path = dir.join(still_file_name(base_name, label));
        write_png(frame, &path)?;
        written.push(path);
    }

    tracing::debug!(count = written.len(), dir = %dir.display(), "wrote stills");
    Ok(written)
}
