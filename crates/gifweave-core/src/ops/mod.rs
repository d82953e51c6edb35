//! Whole-sequence operations.
//!
//! This module provides functionality for:
//! - Combining two sequences side by side at a chosen frame rate
//! - Cropping every frame to one pixel rectangle
//! - Resizing frames to exact dimensions
//! - Building sequences from still images and decomposing them back
//! - Deriving output sizes that follow a reference aspect ratio
//!
//! Every operation takes its inputs by reference and returns a new sequence.

mod aspect;
mod combine;
mod crop;
mod resize;
mod stills;
mod types;

pub use aspect::{height_for_width, reference_size, resolve_target_size, width_for_height, SizeRange};
pub use combine::{combine_frames, combine_horizontal, frame_duration_for_fps, suggested_fps};
pub use crop::{crop, crop_frame};
pub use resize::{resize, resize_frame, resize_frames};
pub use stills::{
    build_from_directory, build_from_encoded, build_from_stills, decompose, frame_label,
    frame_label_width, list_image_files, still_file_name, STILL_EXTENSIONS,
};
pub use types::{FilterType, OpError, PixelRect};
