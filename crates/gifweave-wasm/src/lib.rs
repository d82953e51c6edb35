//! Gifweave WASM - WebAssembly bindings for gifweave
//!
//! This crate provides WASM bindings to expose the gifweave-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for frames and sequences
//! - `decode` - Sequence and still decoding, building sequences from stills
//! - `encode` - GIF and PNG encoding
//! - `transform` - Combine, crop, resize and sizing helpers
//! - `crop_rect` - Interactive crop rectangle session
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_sequence, encode_gif } from '@gifweave/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const seq = decode_sequence(new Uint8Array(await file.arrayBuffer()));
//! console.log(`Decoded ${seq.length} frames at ${seq.width}x${seq.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod crop_rect;
mod decode;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use crop_rect::JsCropSession;
pub use decode::{build_sequence_from_stills, decode_sequence, decode_still};
pub use encode::{encode_gif, encode_png};
pub use transform::{
    combine_horizontal, crop_sequence, decompose_labels, height_for_width, resize_sequence,
    suggested_fps, width_for_height,
};
pub use types::{JsFrame, JsFrameSequence};

/// Module start hook, run automatically on load.
///
/// Nothing needs setting up: the core keeps no global state and its tracing
/// events are dropped unless a subscriber is installed.
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
