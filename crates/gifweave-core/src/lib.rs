//! Gifweave Core - Animated image sequence processing library
//!
//! This crate provides the core functionality for gifweave: decoding
//! animated GIFs and still images into frame sequences, combining, cropping
//! and resizing sequences, splitting them into stills, re-encoding them with
//! correct timing and loop metadata, and the interactive crop rectangle
//! engine that produces crop regions.

pub mod crop_rect;
pub mod decode;
pub mod encode;
pub mod ops;
pub mod sequence;

pub use crop_rect::{CropSession, DragMode, Point, Rect};
pub use decode::{decode_sequence, decode_sequence_file, DecodeError};
pub use encode::{encode_gif, write_gif, EncodeError, EncodeOptions};
pub use ops::{combine_horizontal, crop, decompose, resize, FilterType, OpError, PixelRect};
pub use sequence::{Frame, FrameSequence, Size};
