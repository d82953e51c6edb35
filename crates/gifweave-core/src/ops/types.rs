//! Shared types for sequence operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for sequence operations.
#[derive(Debug, Error)]
pub enum OpError {
    /// An input had no frames.
    #[error("Input contains no frames")]
    EmptyInput,

    /// The crop rectangle is empty, inverted, or outside a frame.
    #[error("Invalid crop rectangle: ({left}, {top}) - ({right}, {bottom})")]
    InvalidRect {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    },

    /// None of the given still images could be read.
    #[error("No valid image files were found")]
    NoValidImages,

    /// A target size has a zero dimension.
    #[error("Invalid size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Frame rate is zero, negative or not a number.
    #[error("Invalid frame rate: {0} (must be greater than 0)")]
    InvalidFrameRate(f64),

    /// Frame and duration counts differ.
    #[error("Timing mismatch: {frames} frames but {durations} durations")]
    TimingMismatch { frames: usize, durations: usize },

    /// A frame's pixel buffer doesn't match its dimensions.
    #[error("Malformed {width}x{height} frame buffer")]
    MalformedFrame { width: u32, height: u32 },
}

/// Filter type for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Integer pixel bounds of a crop: columns `left..right`, rows `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelRect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle covering a whole `width` x `height` frame.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }

    /// True when the rectangle lies inside a `width` x `height` frame.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }

    pub(crate) fn invalid(&self) -> OpError {
        OpError::InvalidRect {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
        }
    }
}
