//! Uniform cropping of every frame in a sequence.
//!
//! The same integer pixel rectangle is extracted from each frame. Timing and
//! loop count are carried over untouched.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left pixel
//! - `right` and `bottom` are exclusive
//! - The rectangle must lie inside every frame; nothing is clamped here, the
//!   interactive crop engine is responsible for producing a valid rectangle

use super::{OpError, PixelRect};
use crate::sequence::{Frame, FrameSequence};

/// Crop every frame of `sequence` to `rect`.
///
/// # Errors
///
/// Returns `OpError::InvalidRect` if the rectangle has no area or does not
/// fit inside every frame.
pub fn crop(sequence: &FrameSequence, rect: PixelRect) -> Result<FrameSequence, OpError> {
    let frames = sequence
        .frames()
        .iter()
        .map(|frame| crop_frame(frame, rect))
        .collect::<Result<Vec<_>, _>>()?;

    sequence.with_frames(frames)
}

/// Extract `rect` from a single frame.
pub fn crop_frame(frame: &Frame, rect: PixelRect) -> Result<Frame, OpError> {
    if !rect.is_valid() || !rect.fits_within(frame.width, frame.height) {
        return Err(rect.invalid());
    }
    if frame.pixels.len() != frame.width as usize * frame.height as usize * 4 {
        return Err(OpError::MalformedFrame {
            width: frame.width,
            height: frame.height,
        });
    }

    // Fast path: full crop returns a clone
    if rect == PixelRect::full(frame.width, frame.height) {
        return Ok(frame.clone());
    }

    let out_width = rect.width() as usize;
    let out_height = rect.height() as usize;
    let src_stride = frame.width as usize * 4;
    let row_bytes = out_width * 4;

    let mut output = Vec::with_capacity(row_bytes * out_height);

    // Copy pixel data row by row for efficiency
    for y in 0..out_height {
        let src_start = (rect.top as usize + y) * src_stride + rect.left as usize * 4;
        output.extend_from_slice(&frame.pixels[src_start..src_start + row_bytes]);
    }

    Ok(Frame::new(rect.width(), rect.height(), output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
