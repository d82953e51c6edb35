//! Side-by-side combination of two sequences.
//!
//! The output canvas is as wide as both first frames together and as tall as
//! the taller of the two. Frame `i` places `a[i]` at the left edge and `b[i]`
//! right after it, each vertically centered on an opaque white background.
//! When one input runs out of frames its last frame is held.

use image::imageops;
use image::{Rgba, RgbaImage};

use super::OpError;
use crate::sequence::{Frame, FrameSequence, Size};

/// Background behind and between the combined frames.
const CANVAS_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Bounds for a suggested combined frame rate.
const MIN_SUGGESTED_FPS: u32 = 1;
const MAX_SUGGESTED_FPS: u32 = 120;

/// Combine two sequences horizontally at a uniform frame rate.
///
/// The output has `max(len(a), len(b))` frames, each lasting
/// `max(1, round(1000 / target_fps))` milliseconds, and the larger of the two
/// loop counts.
///
/// # Errors
///
/// Returns `OpError::InvalidFrameRate` if `target_fps` is not a positive
/// finite number.
pub fn combine_horizontal(
    a: &FrameSequence,
    b: &FrameSequence,
    target_fps: f64,
) -> Result<FrameSequence, OpError> {
    let duration_ms = frame_duration_for_fps(target_fps)?;
    let frames = combine_frames(a.frames(), b.frames())?;
    let loop_count = a.loop_count().max(b.loop_count());

    tracing::debug!(
        frames = frames.len(),
        duration_ms,
        loop_count,
        "combined sequences"
    );

    FrameSequence::uniform(frames, duration_ms, loop_count)
}

/// Composite two frame lists side by side, holding the last frame of the
/// shorter list.
///
/// # Errors
///
/// Returns `OpError::EmptyInput` if either list is empty.
pub fn combine_frames(a: &[Frame], b: &[Frame]) -> Result<Vec<Frame>, OpError> {
    let (Some(first_a), Some(first_b)) = (a.first(), b.first()) else {
        return Err(OpError::EmptyInput);
    };

    let canvas = canvas_size(first_a.size(), first_b.size());
    let offset_b = first_a.width;
    let count = a.len().max(b.len());

    (0..count)
        .map(|i| {
            let left = &a[i.min(a.len() - 1)];
            let right = &b[i.min(b.len() - 1)];
            composite_pair(left, right, canvas, offset_b)
        })
        .collect()
}

/// Frame rate to offer by default when combining `a` and `b`.
///
/// The faster of the two average rates, rounded and clamped to 1..=120.
pub fn suggested_fps(a: &FrameSequence, b: &FrameSequence) -> u32 {
    let fps = a.average_fps().max(b.average_fps());
    if !fps.is_finite() {
        return MAX_SUGGESTED_FPS;
    }
    (fps.round() as u32).clamp(MIN_SUGGESTED_FPS, MAX_SUGGESTED_FPS)
}

/// Per-frame duration in milliseconds for a frame rate.
pub fn frame_duration_for_fps(fps: f64) -> Result<u32, OpError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(OpError::InvalidFrameRate(fps));
    }
    Ok(((1000.0 / fps).round() as u32).max(1))
}

fn canvas_size(a: Size, b: Size) -> Size {
    Size::new(a.width.saturating_add(b.width), a.height.max(b.height))
}

fn composite_pair(left: &Frame, right: &Frame, canvas: Size, offset_b: u32) -> Result<Frame, OpError> {
    let mut out = RgbaImage::from_pixel(canvas.width, canvas.height, CANVAS_BACKGROUND);

    for (frame, x) in [(left, 0), (right, offset_b)] {
        let view = frame.view().ok_or(OpError::MalformedFrame {
            width: frame.width,
            height: frame.height,
        })?;
        imageops::overlay(&mut out, &view, x as i64, centered_top(canvas.height, frame.height));
    }

    Ok(Frame::from_rgba_image(out))
}

/// Top offset that centers `height` in `canvas_height`; taller frames anchor at 0.
fn centered_top(canvas_height: u32, height: u32) -> i64 {
    (canvas_height.saturating_sub(height) / 2) as i64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Output length and canvas size follow the inputs.
        #[test]
        fn prop_output_shape(
            len_a in 1usize..=6,
            len_b in 1usize..=6,
            wa in 1u32..=12,
            ha in 1u32..=12,
            wb in 1u32..=12,
            hb in 1u32..=12,
        ) {
            let a: Vec<Frame> = (0..len_a).map(|_| Frame::filled(wa, ha, [1, 2, 3, 255])).collect();
            let b: Vec<Frame> = (0..len_b).map(|_| Frame::filled(wb, hb, [4, 5, 6, 255])).collect();

            let combined = combine_frames(&a, &b).unwrap();
            prop_assert_eq!(combined.len(), len_a.max(len_b));
            for frame in &combined {
                prop_assert_eq!(frame.size(), Size::new(wa + wb, ha.max(hb)));
            }
        }

        /// Property: Every positive frame rate yields a duration of at least 1 ms.
        #[test]
        fn prop_duration_positive(fps in 0.001f64..100_000.0) {
            prop_assert!(frame_duration_for_fps(fps).unwrap() >= 1);
        }
    }
}
