//! WASM-compatible wrapper types for frames and sequences.
//!
//! This module provides JavaScript-friendly types that wrap the core gifweave
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use gifweave_core::ops::FilterType;
use gifweave_core::sequence::{Frame, FrameSequence};
use wasm_bindgen::prelude::*;

/// A single RGBA frame for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`, which can be wrapped in an `ImageData`
/// directly since the layout is RGBA.
#[wasm_bindgen]
pub struct JsFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsFrame {
    /// Create a new JsFrame from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Frame width in pixels
    /// * `height` - Frame height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsFrame {
        JsFrame {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsFrame {
    pub(crate) fn from_frame(frame: Frame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            pixels: frame.pixels,
        }
    }

    /// Convert back to a core Frame. This clones the pixel data.
    pub(crate) fn to_frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A decoded frame sequence held in WASM memory.
///
/// Frames stay on the WASM side; use `frame(index)` to copy one out for
/// display.
#[wasm_bindgen]
pub struct JsFrameSequence {
    inner: FrameSequence,
}

#[wasm_bindgen]
impl JsFrameSequence {
    /// Number of frames.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Width of the first frame.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.size().width
    }

    /// Height of the first frame.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.size().height
    }

    /// Loop count (0 = loop forever).
    #[wasm_bindgen(getter)]
    pub fn loop_count(&self) -> u16 {
        self.inner.loop_count()
    }

    /// Per-frame durations in milliseconds as Uint32Array.
    pub fn durations(&self) -> Vec<u32> {
        self.inner.durations().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn total_duration_ms(&self) -> f64 {
        self.inner.total_duration_ms() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn average_fps(&self) -> f64 {
        self.inner.average_fps()
    }

    /// Copy out the frame at `index`, or `undefined` past the end.
    pub fn frame(&self, index: usize) -> Option<JsFrame> {
        self.inner.frames().get(index).cloned().map(JsFrame::from_frame)
    }
}

impl JsFrameSequence {
    pub(crate) fn from_sequence(inner: FrameSequence) -> Self {
        Self { inner }
    }

    pub(crate) fn sequence(&self) -> &FrameSequence {
        &self.inner
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Lanczos3.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        1 => FilterType::Bilinear,
        _ => FilterType::Lanczos3,
    }
}
