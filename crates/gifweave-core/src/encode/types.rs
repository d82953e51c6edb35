//! Options and errors for sequence encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sequence::{FrameSequence, DEFAULT_FRAME_DURATION_MS};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Per-frame durations don't line up with the frames
    #[error("Duration mismatch: expected {expected} durations (one per frame), got {actual}")]
    DurationMismatch { expected: usize, actual: usize },

    /// A frame is too large for the output format
    #[error("Invalid dimensions: {width}x{height} exceeds the format limit")]
    InvalidDimensions { width: u32, height: u32 },

    /// Writing the output failed
    #[error("I/O failure: {0}")]
    IoFailure(String),

    /// The encoder rejected the data
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::IoFailure(err.to_string())
    }
}

/// How long each frame is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameTiming {
    /// One duration (ms) for every frame, overriding the sequence timing.
    Uniform(u32),
    /// One duration (ms) per frame; length must equal the frame count.
    PerFrame(Vec<u32>),
}

/// What a player does with a frame's area before drawing the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposal {
    /// Clear to background so transparent regions don't smear into the next frame.
    #[default]
    RestoreBackground,
    /// Leave the frame in place.
    Keep,
    /// Restore whatever was there before the frame was drawn.
    RestorePrevious,
}

impl Disposal {
    pub(crate) fn to_gif(self) -> gif::DisposalMethod {
        match self {
            Disposal::RestoreBackground => gif::DisposalMethod::Background,
            Disposal::Keep => gif::DisposalMethod::Keep,
            Disposal::RestorePrevious => gif::DisposalMethod::Previous,
        }
    }
}

/// Everything the encoder needs besides the frames themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    pub timing: FrameTiming,
    /// Number of repeats; 0 loops forever.
    #[serde(default)]
    pub loop_count: u16,
    #[serde(default)]
    pub disposal: Disposal,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::uniform(DEFAULT_FRAME_DURATION_MS, 0)
    }
}

impl EncodeOptions {
    /// Same duration for every frame (combine and create flows).
    pub fn uniform(duration_ms: u32, loop_count: u16) -> Self {
        Self {
            timing: FrameTiming::Uniform(duration_ms),
            loop_count,
            disposal: Disposal::default(),
        }
    }

    /// Explicit duration per frame (trim flows).
    pub fn per_frame(durations: Vec<u32>, loop_count: u16) -> Self {
        Self {
            timing: FrameTiming::PerFrame(durations),
            loop_count,
            disposal: Disposal::default(),
        }
    }

    /// Keep the sequence's own timing and loop count.
    pub fn preserving(sequence: &FrameSequence) -> Self {
        Self::per_frame(sequence.durations().to_vec(), sequence.loop_count())
    }

    /// Resolve the duration of every frame.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::DurationMismatch` if per-frame durations don't
    /// match `frame_count`.
    pub fn durations_for(&self, frame_count: usize) -> Result<Vec<u32>, EncodeError> {
        match &self.timing {
            FrameTiming::Uniform(ms) => Ok(vec![*ms; frame_count]),
            FrameTiming::PerFrame(durations) if durations.len() == frame_count => {
                Ok(durations.clone())
            }
            FrameTiming::PerFrame(durations) => Err(EncodeError::DurationMismatch {
                expected: frame_count,
                actual: durations.len(),
            }),
        }
    }
}
