//! Decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_sequence`] - Decode an animated GIF (or a still) into a sequence
//! - [`decode_still`] - Decode a single still image into a frame
//! - [`build_sequence_from_stills`] - Assemble a sequence from encoded stills
//!
//! # Example
//!
//! ```typescript
//! import { decode_sequence } from '@gifweave/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const seq = decode_sequence(bytes);
//! console.log(`${seq.length} frames, ${seq.width}x${seq.height}`);
//! ```

use crate::types::{JsFrame, JsFrameSequence};
use gifweave_core::decode;
use gifweave_core::ops::{self, SizeRange};
use gifweave_core::sequence::Size;
use wasm_bindgen::prelude::*;

/// Decode an animated image from bytes.
///
/// GIF content yields every frame composited onto the full canvas, with its
/// own timing and loop count. Other still formats yield a one-frame sequence.
///
/// # Errors
///
/// Returns an error if the format is unknown or the data is corrupt.
#[wasm_bindgen]
pub fn decode_sequence(bytes: &[u8]) -> Result<JsFrameSequence, JsValue> {
    decode::decode_sequence(bytes)
        .map(JsFrameSequence::from_sequence)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode a still image into an RGBA frame.
#[wasm_bindgen]
pub fn decode_still(bytes: &[u8]) -> Result<JsFrame, JsValue> {
    decode::decode_still(bytes)
        .map(JsFrame::from_frame)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a sequence from an array of encoded still images (`Uint8Array[]`).
///
/// Entries that can't be decoded are skipped. When `width` or `height` is
/// given, every image is resized. A missing edge comes from the first
/// decodable image, scaled to keep its aspect ratio when `keep_aspect` is set.
/// Edges are clamped to 16-4096.
///
/// # Errors
///
/// Returns an error if no entry could be decoded.
#[wasm_bindgen]
pub fn build_sequence_from_stills(
    images: &js_sys::Array,
    duration_ms: u32,
    width: Option<u32>,
    height: Option<u32>,
    keep_aspect: bool,
) -> Result<JsFrameSequence, JsValue> {
    let buffers: Vec<Vec<u8>> = images
        .iter()
        .map(|value| js_sys::Uint8Array::new(&value).to_vec())
        .collect();

    let target = target_size(&buffers, width, height, keep_aspect);

    ops::build_from_encoded(&buffers, duration_ms, target)
        .map(JsFrameSequence::from_sequence)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolve the requested size against the first decodable image.
fn target_size(buffers: &[Vec<u8>], width: Option<u32>, height: Option<u32>, keep_aspect: bool) -> Option<Size> {
    let reference = if width.is_some() || height.is_some() {
        buffers
            .iter()
            .find_map(|bytes| decode::decode_still(bytes).ok())
            .map(|frame| frame.size())
    } else {
        None
    };
    ops::resolve_target_size(width, height, keep_aspect, reference, SizeRange::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifweave_core::encode::{encode_gif, encode_png, EncodeOptions};
    use gifweave_core::sequence::{Frame, FrameSequence};

    #[test]
    fn test_decode_sequence_gif() {
        let frames = vec![
            Frame::filled(6, 4, [255, 0, 0, 255]),
            Frame::filled(6, 4, [0, 255, 0, 255]),
        ];
        let seq = FrameSequence::new(frames, vec![80, 120], 0).unwrap();
        let bytes = encode_gif(&seq, &EncodeOptions::preserving(&seq)).unwrap();

        let decoded = decode_sequence(&bytes).unwrap();
        assert_eq!(decoded.length(), 2);
        assert_eq!(decoded.durations(), vec![80, 120]);
        assert_eq!((decoded.width(), decoded.height()), (6, 4));
    }

    #[test]
    fn test_target_size_single_edge() {
        let png = encode_png(&Frame::filled(100, 50, [0, 0, 0, 255])).unwrap();
        let buffers = vec![b"junk".to_vec(), png];

        assert_eq!(target_size(&buffers, None, None, true), None);
        assert_eq!(target_size(&buffers, Some(40), Some(30), false), Some(Size::new(40, 30)));
        // Missing edge taken from the first decodable image.
        assert_eq!(target_size(&buffers, Some(40), None, false), Some(Size::new(40, 50)));
        assert_eq!(target_size(&buffers, None, Some(20), false), Some(Size::new(100, 20)));
        // Keep-aspect derives the other edge.
        assert_eq!(target_size(&buffers, Some(40), None, true), Some(Size::new(40, 20)));
        assert_eq!(target_size(&buffers, None, Some(30), true), Some(Size::new(60, 30)));
    }

    #[test]
    fn test_target_size_clamps_and_needs_reference() {
        let png = encode_png(&Frame::filled(10, 10, [0, 0, 0, 255])).unwrap();
        assert_eq!(target_size(&[png], Some(8), Some(5000), false), Some(Size::new(16, 4096)));
        assert_eq!(target_size(&[b"junk".to_vec()], Some(40), None, false), None);
    }

    #[test]
    fn test_decode_still_png() {
        let png = encode_png(&Frame::filled(3, 2, [10, 20, 30, 40])).unwrap();
        let frame = decode_still(&png).unwrap();
        assert_eq!((frame.width(), frame.height()), (3, 2));
        assert_eq!(&frame.pixels()[0..4], &[10, 20, 30, 40]);
    }
}

/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gifweave_core::encode::encode_png;
    use gifweave_core::sequence::Frame;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_invalid_bytes() {
        assert!(decode_sequence(&[0u8, 1, 2, 3]).is_err());
        assert!(decode_still(&[]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_build_sequence_from_stills() {
        let png = encode_png(&Frame::filled(5, 5, [1, 2, 3, 255])).unwrap();
        let images = js_sys::Array::new();
        images.push(&js_sys::Uint8Array::from(png.as_slice()));
        images.push(&js_sys::Uint8Array::from(&b"junk"[..]));
        images.push(&js_sys::Uint8Array::from(png.as_slice()));

        let seq = build_sequence_from_stills(&images, 50, Some(20), Some(20), false).unwrap();
        assert_eq!(seq.length(), 2);
        assert_eq!(seq.width(), 20);
        assert_eq!(seq.durations(), vec![50, 50]);
    }

    #[wasm_bindgen_test]
    fn test_build_sequence_width_only() {
        let png = encode_png(&Frame::filled(40, 20, [1, 2, 3, 255])).unwrap();
        let images = js_sys::Array::new();
        images.push(&js_sys::Uint8Array::from(png.as_slice()));

        let seq = build_sequence_from_stills(&images, 50, Some(80), None, true).unwrap();
        assert_eq!((seq.width(), seq.height()), (80, 40));
    }

    #[wasm_bindgen_test]
    fn test_build_sequence_nothing_valid() {
        let images = js_sys::Array::new();
        images.push(&js_sys::Uint8Array::from(&b"junk"[..]));
        assert!(build_sequence_from_stills(&images, 50, None, None, false).is_err());
    }
}
