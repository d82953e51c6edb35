//! Conversion between sequences and lists of still images.
//!
//! Building goes from image files to a sequence, skipping anything that can't
//! be decoded. Decomposing goes the other way and labels every frame with a
//! zero-padded 1-based index.

use std::fs;
use std::path::{Path, PathBuf};

use super::{resize_frame, FilterType, OpError};
use crate::decode::{decode_still, decode_still_file, DecodeError};
use crate::sequence::{Frame, FrameSequence, Size};

/// Labels are never shorter than this many digits.
const MIN_LABEL_WIDTH: usize = 3;

/// File extensions picked up when building from a directory.
pub const STILL_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tiff", "webp"];

/// Build a sequence from still image files, in the given order.
///
/// Files that can't be read or decoded are skipped. Every frame lasts
/// `duration_ms` and the sequence loops forever. With a `target_size`, every
/// image is resized to it with Lanczos3 resampling.
///
/// # Errors
///
/// - `OpError::InvalidSize` if `target_size` has a zero dimension
/// - `OpError::NoValidImages` if no file could be decoded
pub fn build_from_stills<P: AsRef<Path>>(
    paths: &[P],
    duration_ms: u32,
    target_size: Option<Size>,
) -> Result<FrameSequence, OpError> {
    let decoded = paths.iter().map(|path| {
        let path = path.as_ref();
        (path.display().to_string(), decode_still_file(path))
    });
    assemble(decoded, duration_ms, target_size)
}

/// Build a sequence from encoded still images held in memory.
///
/// Behaves like [`build_from_stills`]; undecodable entries are skipped.
pub fn build_from_encoded<B: AsRef<[u8]>>(
    images: &[B],
    duration_ms: u32,
    target_size: Option<Size>,
) -> Result<FrameSequence, OpError> {
    let decoded = images
        .iter()
        .enumerate()
        .map(|(i, bytes)| (format!("#{}", i), decode_still(bytes.as_ref())));
    assemble(decoded, duration_ms, target_size)
}

fn assemble(
    decoded: impl Iterator<Item = (String, Result<Frame, DecodeError>)>,
    duration_ms: u32,
    target_size: Option<Size>,
) -> Result<FrameSequence, OpError> {
    if let Some(size) = target_size.filter(Size::is_empty) {
        return Err(OpError::InvalidSize {
            width: size.width,
            height: size.height,
        });
    }

    let mut frames = Vec::new();
    let mut skipped = 0usize;
    for (source, result) in decoded {
        let frame = match result {
            Ok(frame) => frame,
            Err(e) => {
                tracing::debug!(source = %source, error = %e, "skipping unreadable still");
                skipped += 1;
                continue;
            }
        };
        frames.push(match target_size {
            Some(size) => resize_frame(&frame, size, FilterType::Lanczos3)?,
            None => frame,
        });
    }

    if frames.is_empty() {
        return Err(OpError::NoValidImages);
    }

    tracing::debug!(frames = frames.len(), skipped, "built sequence from stills");
    FrameSequence::uniform(frames, duration_ms, 0)
}

/// Build a sequence from every image file in `dir`, sorted by file name.
///
/// # Errors
///
/// Returns `OpError::NoValidImages` if the directory can't be listed or holds
/// no decodable image.
pub fn build_from_directory(
    dir: impl AsRef<Path>,
    duration_ms: u32,
    target_size: Option<Size>,
) -> Result<FrameSequence, OpError> {
    let dir = dir.as_ref();
    let paths = match list_image_files(dir) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
            return Err(OpError::NoValidImages);
        }
    };
    build_from_stills(&paths, duration_ms, target_size)
}

/// Regular files in `dir` with a still image extension, sorted by file name.
///
/// Extensions are matched case-insensitively against [`STILL_EXTENSIONS`].
pub fn list_image_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() && has_still_extension(&entry.path()) {
            paths.push(entry.path());
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn has_still_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| STILL_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Split a sequence into labeled frames, optionally resized.
///
/// Labels are the 1-based frame index zero-padded to
/// [`frame_label_width`] digits, so they sort in playback order.
///
/// # Errors
///
/// Returns `OpError::InvalidSize` if `target_size` has a zero dimension.
pub fn decompose(sequence: &FrameSequence, target_size: Option<Size>) -> Result<Vec<(String, Frame)>, OpError> {
    let width = frame_label_width(sequence.len());

    sequence
        .frames()
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let frame = match target_size {
                Some(size) => resize_frame(frame, size, FilterType::Lanczos3)?,
                None => frame.clone(),
            };
            Ok((frame_label(i + 1, width), frame))
        })
        .collect()
}

/// Number of digits used for frame labels: `max(3, digits(count))`.
pub fn frame_label_width(count: usize) -> usize {
    count.to_string().len().max(MIN_LABEL_WIDTH)
}

/// Zero-padded label for a 1-based frame index.
pub fn frame_label(index: usize, width: usize) -> String {
    format!("{:0width$}", index, width = width)
}

/// File name for a decomposed frame: `{base}_{label}.png`.
pub fn still_file_name(base: &str, label: &str) -> String {
    format!("{}_{}.png", base, label)
}
