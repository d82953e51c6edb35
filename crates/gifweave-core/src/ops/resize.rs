//! Frame resizing.
//!
//! Resizes to exact dimensions using the `image` crate's resampling filters.
//! All functions return new frames without modifying the input.

use super::{FilterType, OpError};
use crate::sequence::{Frame, FrameSequence, Size};

/// Resize a frame to exact dimensions.
///
/// # Errors
///
/// - `OpError::InvalidSize` if either target dimension is zero
/// - `OpError::MalformedFrame` if the source buffer doesn't match its dimensions
pub fn resize_frame(frame: &Frame, size: Size, filter: FilterType) -> Result<Frame, OpError> {
    if size.is_empty() {
        return Err(OpError::InvalidSize {
            width: size.width,
            height: size.height,
        });
    }

    // Fast path: if dimensions match, just clone
    if frame.size() == size {
        return Ok(frame.clone());
    }

    let view = frame.view().ok_or(OpError::MalformedFrame {
        width: frame.width,
        height: frame.height,
    })?;

    let resized = image::imageops::resize(&view, size.width, size.height, filter.to_image_filter());

    Ok(Frame::from_rgba_image(resized))
}

/// Resize every frame to the same dimensions.
pub fn resize_frames(frames: &[Frame], size: Size, filter: FilterType) -> Result<Vec<Frame>, OpError> {
    frames.iter().map(|f| resize_frame(f, size, filter)).collect()
}

/// Resize every frame of a sequence, keeping timing and loop count.
pub fn resize(sequence: &FrameSequence, size: Size, filter: FilterType) -> Result<FrameSequence, OpError> {
    let frames = resize_frames(sequence.frames(), size, filter)?;
    sequence.with_frames(frames)
}
