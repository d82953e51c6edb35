//! Encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_gif`] - Encode a sequence as an animated GIF
//! - [`encode_png`] - Encode a single frame as PNG
//!
//! # Example
//!
//! ```typescript
//! import { encode_gif } from '@gifweave/wasm';
//!
//! // Keep the sequence's own timing and loop count
//! const gif = encode_gif(seq);
//!
//! // Or override them
//! const fast = encode_gif(seq, { timing: { uniform: 50 }, loop_count: 0 });
//! ```

use crate::types::{JsFrame, JsFrameSequence};
use gifweave_core::encode::{self, EncodeError, EncodeOptions};
use gifweave_core::sequence::FrameSequence;
use wasm_bindgen::prelude::*;

/// Encode a sequence as GIF bytes.
///
/// `options` is an optional object matching `EncodeOptions`:
/// `{ timing: { uniform: ms } | { per_frame: [ms, ...] }, loop_count?, disposal? }`.
/// When omitted, the sequence's own durations and loop count are kept.
///
/// # Errors
///
/// Returns an error if the options object is malformed, per-frame durations
/// don't match the frame count, or encoding fails.
#[wasm_bindgen]
pub fn encode_gif(seq: &JsFrameSequence, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: Option<EncodeOptions> = if options.is_undefined() || options.is_null() {
        None
    } else {
        Some(
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid encode options: {}", e)))?,
        )
    };

    encode_sequence(seq.sequence(), options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a frame as PNG bytes.
#[wasm_bindgen]
pub fn encode_png(frame: &JsFrame) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&frame.to_frame()).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn encode_sequence(seq: &FrameSequence, options: Option<EncodeOptions>) -> Result<Vec<u8>, EncodeError> {
    let options = options.unwrap_or_else(|| EncodeOptions::preserving(seq));
    encode::encode_gif(seq, &options)
}


/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gifweave_core::sequence::Frame;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn js_sequence() -> JsFrameSequence {
        let frames = vec![Frame::filled(4, 4, [9, 9, 9, 255]); 3];
        JsFrameSequence::from_sequence(FrameSequence::uniform(frames, 100, 0).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_encode_gif_without_options() {
        let gif = encode_gif(&js_sequence(), JsValue::UNDEFINED).unwrap();
        assert_eq!(&gif[0..6], b"GIF89a");
    }

    #[wasm_bindgen_test]
    fn test_encode_gif_with_options_object() {
        let options = EncodeOptions::per_frame(vec![10, 20, 30], 2);
        let js_options = serde_wasm_bindgen::to_value(&options).unwrap();
        assert!(encode_gif(&js_sequence(), js_options).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_encode_gif_duration_mismatch() {
        let options = EncodeOptions::per_frame(vec![10], 0);
        let js_options = serde_wasm_bindgen::to_value(&options).unwrap();
        assert!(encode_gif(&js_sequence(), js_options).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_gif_invalid_options() {
        let invalid = serde_wasm_bindgen::to_value(&"not an object").unwrap();
        assert!(encode_gif(&js_sequence(), invalid).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png() {
        let frame = JsFrame::new(3, 3, vec![128u8; 36]);
        let png = encode_png(&frame).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
}
