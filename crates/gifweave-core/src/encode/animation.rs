//! Animated GIF encoding.
//!
//! Frames are quantized with the gif crate's built-in palette builder (exact
//! palette when a frame has at most 256 colors, NeuQuant otherwise). Fully
//! transparent pixels map to the frame's transparent index.

use std::path::Path;

use gif::{Encoder, Repeat};

use super::{write_atomic, EncodeError, EncodeOptions};
use crate::sequence::FrameSequence;

/// NeuQuant sampling speed (1 = best, 30 = fastest).
const QUANTIZE_SPEED: i32 = 10;

/// Encode a sequence as GIF bytes.
///
/// # Errors
///
/// - `EncodeError::DurationMismatch` if per-frame durations don't match the frame count
/// - `EncodeError::InvalidDimensions` if a frame is wider or taller than 65535 pixels
/// - `EncodeError::EncodingFailed` if the encoder rejects the data
pub fn encode_gif(sequence: &FrameSequence, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let durations = options.durations_for(sequence.len())?;

    let screen_width = sequence.frames().iter().map(|f| f.width).max().unwrap_or(0);
    let screen_height = sequence.frames().iter().map(|f| f.height).max().unwrap_or(0);
    let (screen_width, screen_height) = gif_dimensions(screen_width, screen_height)?;

    let mut buffer = Vec::new();
    {
        let mut encoder = Encoder::new(&mut buffer, screen_width, screen_height, &[])
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

        encoder
            .set_repeat(repeat_for(options.loop_count))
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

        for (frame, &duration_ms) in sequence.frames().iter().zip(&durations) {
            let (width, height) = gif_dimensions(frame.width, frame.height)?;

            let expected = frame.width as usize * frame.height as usize * 4;
            if frame.pixels.len() != expected {
                return Err(EncodeError::EncodingFailed(format!(
                    "frame buffer holds {} bytes, expected {}",
                    frame.pixels.len(),
                    expected
                )));
            }

            let mut pixels = frame.pixels.clone();
            let mut gif_frame = gif::Frame::from_rgba_speed(width, height, &mut pixels, QUANTIZE_SPEED);
            gif_frame.delay = delay_centiseconds(duration_ms);
            gif_frame.dispose = options.disposal.to_gif();

            encoder
                .write_frame(&gif_frame)
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
    }

    tracing::debug!(
        frames = sequence.len(),
        width = screen_width,
        height = screen_height,
        loop_count = options.loop_count,
        bytes = buffer.len(),
        "encoded GIF"
    );

    Ok(buffer)
}

/// Encode a sequence and write it to `path`.
///
/// Parent directories are created as needed. The data is written to a
/// temporary sibling file first and renamed into place, so a failed write
/// never leaves a partial GIF at `path`.
pub fn write_gif(
    sequence: &FrameSequence,
    path: impl AsRef<Path>,
    options: &EncodeOptions,
) -> Result<(), EncodeError> {
    let bytes = encode_gif(sequence, options)?;
    write_atomic(path.as_ref(), &bytes)
}

/// GIF stores delays in hundredths of a second.
fn delay_centiseconds(duration_ms: u32) -> u16 {
    (duration_ms.saturating_add(5) / 10).clamp(1, u16::MAX as u32) as u16
}

fn repeat_for(loop_count: u16) -> Repeat {
    match loop_count {
        0 => Repeat::Infinite,
        n => Repeat::Finite(n),
    }
}

fn gif_dimensions(width: u32, height: u32) -> Result<(u16, u16), EncodeError> {
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(EncodeError::InvalidDimensions { width, height }),
    }
}
