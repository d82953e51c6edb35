//! Encoding pipeline for gifweave.
//!
//! This module provides functionality for:
//! - Encoding a [`FrameSequence`](crate::sequence::FrameSequence) as an animated GIF
//!   with uniform or per-frame timing, a loop count and a disposal method
//! - Encoding single frames as PNG, and writing decomposed stills to a directory
//!
//! All options are passed explicitly through [`EncodeOptions`]; nothing is
//! remembered between calls.
//!
//! # Writing Files
//!
//! File writers create missing parent directories and write through a
//! temporary sibling file that is renamed into place on success.

mod animation;
mod still;
mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use animation::{encode_gif, write_gif};
pub use still::{encode_png, write_png, write_stills};
pub use types::{Disposal, EncodeError, EncodeOptions, FrameTiming};

/// Write `bytes` to `path` via a temporary file and a rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), EncodeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp = partial_path(path);
    if let Err(e) = fs::write(&temp, bytes).and_then(|_| fs::rename(&temp, path)) {
        let _ = fs::remove_file(&temp);
        return Err(EncodeError::IoFailure(format!("{}: {}", path.display(), e)));
    }
    Ok(())
}

/// Hidden sibling used while a file is being written.
fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.partial", name))
}
