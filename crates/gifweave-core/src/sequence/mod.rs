//! Decoded representation of an animated image.
//!
//! A [`FrameSequence`] is an ordered list of RGBA [`Frame`]s, a parallel list
//! of per-frame display durations in milliseconds, and a loop count.
//!
//! # Invariants
//!
//! - At least one frame
//! - Exactly one duration per frame
//! - Every duration is at least 1ms
//! - Loop count 0 means "repeat forever"
//!
//! The only way to build a sequence is [`FrameSequence::new`], which enforces
//! all of the above, so every other module can rely on them.

mod frame;

pub use frame::{Frame, Size};

use crate::ops::OpError;

/// Display duration used when a source carries no timing information.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// Ordered frames plus per-frame timing and loop metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    durations: Vec<u32>,
    loop_count: u16,
}

impl FrameSequence {
    /// Build a sequence, validating the frame/timing invariants.
    ///
    /// Durations of 0 are raised to 1ms.
    ///
    /// # Errors
    ///
    /// - [`OpError::EmptyInput`] if `frames` is empty
    /// - [`OpError::TimingMismatch`] if the lengths differ
    pub fn new(frames: Vec<Frame>, durations: Vec<u32>, loop_count: u16) -> Result<Self, OpError> {
        if frames.is_empty() {
            return Err(OpError::EmptyInput);
        }
        if frames.len() != durations.len() {
            return Err(OpError::TimingMismatch {
                frames: frames.len(),
                durations: durations.len(),
            });
        }

        let durations = durations.into_iter().map(|d| d.max(1)).collect();
        Ok(Self {
            frames,
            durations,
            loop_count,
        })
    }

    /// Build a sequence where every frame shares one duration.
    pub fn uniform(frames: Vec<Frame>, duration_ms: u32, loop_count: u16) -> Result<Self, OpError> {
        let durations = vec![duration_ms; frames.len()];
        Self::new(frames, durations, loop_count)
    }

    /// Single-frame sequence with the default duration and infinite looping.
    pub fn still(frame: Frame) -> Self {
        Self {
            frames: vec![frame],
            durations: vec![DEFAULT_FRAME_DURATION_MS],
            loop_count: 0,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    pub fn loop_count(&self) -> u16 {
        self.loop_count
    }

    /// Number of frames (always at least 1).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn first_frame(&self) -> &Frame {
        &self.frames[0]
    }

    /// Frame at `index`, clamped to the last frame.
    ///
    /// This is the hold-last lookup used when reconciling sequences of
    /// different lengths.
    pub fn frame_or_last(&self, index: usize) -> &Frame {
        &self.frames[index.min(self.frames.len() - 1)]
    }

    /// Size of the first frame.
    pub fn size(&self) -> Size {
        self.first_frame().size()
    }

    /// Sum of all frame durations.
    pub fn total_duration_ms(&self) -> u64 {
        self.durations.iter().map(|&d| d as u64).sum()
    }

    /// Playback rate implied by the mean frame duration.
    pub fn average_fps(&self) -> f64 {
        let mean = self.total_duration_ms() as f64 / self.durations.len() as f64;
        1000.0 / mean
    }

    /// Consume the sequence, returning its frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Replace the frames while keeping timing and loop count.
    pub(crate) fn with_frames(&self, frames: Vec<Frame>) -> Result<Self, OpError> {
        Self::new(frames, self.durations.clone(), self.loop_count)
    }
}
