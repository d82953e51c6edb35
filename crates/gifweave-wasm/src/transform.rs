//! WASM bindings for sequence operations.
//!
//! This module provides JavaScript bindings for combining, cropping and
//! resizing sequences, plus the helpers a UI needs to drive them (default
//! frame rate, still labels, aspect-locked sizes).

use crate::types::{filter_from_u8, JsFrameSequence};
use gifweave_core::ops::{self, PixelRect, SizeRange};
use gifweave_core::sequence::Size;
use wasm_bindgen::prelude::*;

/// Combine two sequences side by side at `fps` frames per second.
///
/// The shorter sequence holds its last frame until the longer one ends.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const fps = suggested_fps(left, right);
/// const combined = combine_horizontal(left, right, fps);
/// ```
#[wasm_bindgen]
pub fn combine_horizontal(
    a: &JsFrameSequence,
    b: &JsFrameSequence,
    fps: f64,
) -> Result<JsFrameSequence, JsValue> {
    ops::combine_horizontal(a.sequence(), b.sequence(), fps)
        .map(JsFrameSequence::from_sequence)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Default frame rate for combining `a` and `b` (1 to 120).
#[wasm_bindgen]
pub fn suggested_fps(a: &JsFrameSequence, b: &JsFrameSequence) -> u32 {
    ops::suggested_fps(a.sequence(), b.sequence())
}

/// Crop every frame to integer pixel bounds (right and bottom exclusive).
///
/// Timing and loop count are kept.
#[wasm_bindgen]
pub fn crop_sequence(
    seq: &JsFrameSequence,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
) -> Result<JsFrameSequence, JsValue> {
    ops::crop(seq.sequence(), PixelRect::new(left, top, right, bottom))
        .map(JsFrameSequence::from_sequence)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize every frame to exact dimensions.
///
/// `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
#[wasm_bindgen]
pub fn resize_sequence(
    seq: &JsFrameSequence,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsFrameSequence, JsValue> {
    ops::resize(seq.sequence(), Size::new(width, height), filter_from_u8(filter))
        .map(JsFrameSequence::from_sequence)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Labels for decomposing a sequence of `count` frames ("001", "002", ...).
#[wasm_bindgen]
pub fn decompose_labels(count: usize) -> Vec<String> {
    let width = ops::frame_label_width(count);
    (1..=count).map(|i| ops::frame_label(i, width)).collect()
}

/// Height that keeps the reference aspect ratio, clamped to 16..=4096.
///
/// Returns `undefined` for an empty reference.
#[wasm_bindgen]
pub fn height_for_width(width: u32, ref_width: u32, ref_height: u32) -> Option<u32> {
    ops::height_for_width(width, Size::new(ref_width, ref_height), SizeRange::default())
}

/// Width that keeps the reference aspect ratio, clamped to 16..=4096.
#[wasm_bindgen]
pub fn width_for_height(height: u32, ref_width: u32, ref_height: u32) -> Option<u32> {
    ops::width_for_height(height, Size::new(ref_width, ref_height), SizeRange::default())
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gifweave_core::sequence::{Frame, FrameSequence};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn js_sequence() -> JsFrameSequence {
        let frames = vec![Frame::filled(10, 10, [0, 0, 0, 255]); 2];
        JsFrameSequence::from_sequence(FrameSequence::uniform(frames, 100, 0).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_invalid_crop_rect() {
        assert!(crop_sequence(&js_sequence(), 5, 5, 5, 8).is_err());
        assert!(crop_sequence(&js_sequence(), 0, 0, 11, 10).is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_fps() {
        assert!(combine_horizontal(&js_sequence(), &js_sequence(), 0.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_resize() {
        assert!(resize_sequence(&js_sequence(), 0, 10, 2).is_err());
    }
}
