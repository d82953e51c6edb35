//! Animated GIF decoding with frame compositing.
//!
//! GIF frames are usually deltas: each one covers a sub-rectangle of the
//! logical screen and relies on what previous frames left behind. Every frame
//! is therefore drawn onto a persistent canvas, the canvas is snapshotted as
//! the output frame, and the frame's disposal method is applied before the
//! next one is drawn.

use std::io::Cursor;

use gif::{ColorOutput, DecodeOptions, DisposalMethod, Repeat};

use super::DecodeError;
use crate::sequence::{Frame, FrameSequence, DEFAULT_FRAME_DURATION_MS};

/// Decode every frame of a GIF into full-canvas RGBA frames.
pub(super) fn decode_gif(bytes: &[u8]) -> Result<FrameSequence, DecodeError> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(Cursor::new(bytes))
        .map_err(|e| DecodeError::Corrupt(e.to_string()))?;

    let width = decoder.width() as u32;
    let height = decoder.height() as u32;
    if width == 0 || height == 0 {
        return Err(DecodeError::Corrupt("empty logical screen".to_string()));
    }

    let mut canvas = Canvas::new(width, height);
    let mut frames = Vec::new();
    let mut delays: Vec<Option<u32>> = Vec::new();

    loop {
        match decoder.read_next_frame() {
            Ok(Some(frame)) => {
                let saved = (frame.dispose == DisposalMethod::Previous).then(|| canvas.pixels.clone());

                canvas.draw(frame);
                frames.push(canvas.to_frame());
                delays.push((frame.delay > 0).then(|| frame.delay as u32 * 10));

                match frame.dispose {
                    DisposalMethod::Background => canvas.clear(frame),
                    DisposalMethod::Previous => {
                        if let Some(saved) = saved {
                            canvas.pixels = saved;
                        }
                    }
                    _ => {}
                }
            }
            Ok(None) => break,
            Err(e) if !frames.is_empty() => {
                tracing::warn!(
                    decoded = frames.len(),
                    error = %e,
                    "GIF truncated, keeping frames decoded so far"
                );
                break;
            }
            Err(e) => return Err(DecodeError::Corrupt(e.to_string())),
        }
    }

    if frames.is_empty() {
        return Err(DecodeError::Corrupt("no frames found".to_string()));
    }

    let loop_count = match decoder.repeat() {
        Repeat::Infinite => 0,
        Repeat::Finite(n) => n,
    };
    let durations = resolve_durations(&delays);

    tracing::debug!(
        frames = frames.len(),
        width,
        height,
        loop_count,
        "decoded GIF"
    );

    FrameSequence::new(frames, durations, loop_count).map_err(|e| DecodeError::Corrupt(e.to_string()))
}

/// Fill in missing per-frame delays.
///
/// A frame without its own delay inherits the sequence default (the first
/// delay present anywhere in the file), falling back to 100ms.
pub(crate) fn resolve_durations(delays: &[Option<u32>]) -> Vec<u32> {
    let default = delays.iter().flatten().next().copied();
    delays
        .iter()
        .map(|d| d.or(default).unwrap_or(DEFAULT_FRAME_DURATION_MS))
        .collect()
}

/// The GIF logical screen as an RGBA buffer.
struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Draw the opaque pixels of a frame at its offset, clipped to the canvas.
    fn draw(&mut self, frame: &gif::Frame<'_>) {
        let frame_width = frame.width as usize;
        if frame_width == 0 {
            return;
        }

        for (i, px) in frame.buffer.chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let x = frame.left as u32 + (i % frame_width) as u32;
            let y = frame.top as u32 + (i / frame_width) as u32;
            if x >= self.width || y >= self.height {
                continue;
            }
            let idx = (y as usize * self.width as usize + x as usize) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(px);
        }
    }

    /// Reset the frame's rectangle to transparent.
    fn clear(&mut self, frame: &gif::Frame<'_>) {
        let left = (frame.left as u32).min(self.width);
        let top = (frame.top as u32).min(self.height);
        let right = (left + frame.width as u32).min(self.width);
        let bottom = (top + frame.height as u32).min(self.height);

        for y in top..bottom {
            let start = (y as usize * self.width as usize + left as usize) * 4;
            let end = (y as usize * self.width as usize + right as usize) * 4;
            self.pixels[start..end].fill(0);
        }
    }

    fn to_frame(&self) -> Frame {
        Frame::new(self.width, self.height, self.pixels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode frames with the gif crate directly so tests control every field.
    fn encode_raw(
        width: u16,
        height: u16,
        frames: Vec<gif::Frame<'static>>,
        repeat: Option<Repeat>,
    ) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut buffer, width, height, &[]).unwrap();
            if let Some(repeat) = repeat {
                encoder.set_repeat(repeat).unwrap();
            }
            for frame in &frames {
                encoder.write_frame(frame).unwrap();
            }
        }
        buffer
    }

    fn solid(width: u16, height: u16, rgba: [u8; 4], delay: u16) -> gif::Frame<'static> {
        let mut pixels: Vec<u8> = (0..width as usize * height as usize)
            .flat_map(|_| rgba)
            .collect();
        let mut frame = gif::Frame::from_rgba_speed(width, height, &mut pixels, 10);
        frame.delay = delay;
        frame
    }

    #[test]
    fn test_resolve_durations_all_present() {
        assert_eq!(
            resolve_durations(&[Some(20), Some(40), Some(60)]),
            vec![20, 40, 60]
        );
    }

    #[test]
    fn test_resolve_durations_inherits_sequence_default() {
        assert_eq!(
            resolve_durations(&[None, Some(70), None]),
            vec![70, 70, 70]
        );
    }

    #[test]
    fn test_resolve_durations_falls_back_to_100() {
        assert_eq!(resolve_durations(&[None, None]), vec![100, 100]);
    }

    #[test]
    fn test_decode_timing_and_loop() {
        let bytes = encode_raw(
            4,
            4,
            vec![
                solid(4, 4, [255, 0, 0, 255], 5),
                solid(4, 4, [0, 255, 0, 255], 12),
            ],
            Some(Repeat::Finite(3)),
        );

        let seq = decode_gif(&bytes).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.durations(), &[50, 120]);
        assert_eq!(seq.loop_count(), 3);
        assert_eq!(seq.size().width, 4);
    }

    #[test]
    fn test_decode_infinite_loop_maps_to_zero() {
        let bytes = encode_raw(
            2,
            2,
            vec![solid(2, 2, [0, 0, 255, 255], 10)],
            Some(Repeat::Infinite),
        );
        assert_eq!(decode_gif(&bytes).unwrap().loop_count(), 0);
    }

    #[test]
    fn test_decode_missing_loop_defaults_to_zero() {
        let bytes = encode_raw(2, 2, vec![solid(2, 2, [0, 0, 255, 255], 10)], None);
        assert_eq!(decode_gif(&bytes).unwrap().loop_count(), 0);
    }

    #[test]
    fn test_decode_zero_delay_uses_default() {
        let bytes = encode_raw(
            2,
            2,
            vec![
                solid(2, 2, [255, 0, 0, 255], 0),
                solid(2, 2, [255, 0, 0, 255], 0),
            ],
            None,
        );
        assert_eq!(decode_gif(&bytes).unwrap().durations(), &[100, 100]);
    }

    #[test]
    fn test_delta_frame_composited_over_previous() {
        // Second frame only covers the top-left pixel.
        let mut small = solid(1, 1, [0, 0, 255, 255], 10);
        small.left = 0;
        small.top = 0;

        let bytes = encode_raw(
            3,
            3,
            vec![solid(3, 3, [255, 0, 0, 255], 10), small],
            None,
        );
        let seq = decode_gif(&bytes).unwrap();

        let second = &seq.frames()[1];
        assert_eq!((second.width, second.height), (3, 3));
        assert_eq!(second.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(second.pixel(2, 2), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_background_disposal_clears_region() {
        let mut first = solid(3, 3, [255, 0, 0, 255], 10);
        first.dispose = DisposalMethod::Background;
        let mut small = solid(1, 1, [0, 255, 0, 255], 10);
        small.left = 2;
        small.top = 2;

        let bytes = encode_raw(3, 3, vec![first, small], None);
        let seq = decode_gif(&bytes).unwrap();

        let second = &seq.frames()[1];
        assert_eq!(second.pixel(0, 0).map(|p| p[3]), Some(0));
        assert_eq!(second.pixel(2, 2), Some([0, 255, 0, 255]));
    }

    #[test]
    fn test_previous_disposal_restores_canvas() {
        let base = solid(2, 2, [255, 0, 0, 255], 10);
        let mut overlay = solid(2, 2, [0, 255, 0, 255], 10);
        overlay.dispose = DisposalMethod::Previous;
        let mut tiny = solid(1, 1, [0, 0, 255, 255], 10);
        tiny.left = 1;
        tiny.top = 1;

        let bytes = encode_raw(2, 2, vec![base, overlay, tiny], None);
        let seq = decode_gif(&bytes).unwrap();

        assert_eq!(seq.frames()[1].pixel(0, 0), Some([0, 255, 0, 255]));
        // After the overlay is disposed, the red base shows through again.
        assert_eq!(seq.frames()[2].pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(seq.frames()[2].pixel(1, 1), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_truncated_header_is_corrupt() {
        let bytes = b"GIF89a\x04\x00";
        assert!(matches!(decode_gif(bytes), Err(DecodeError::Corrupt(_))));
    }

    #[test]
    fn test_header_only_has_no_frames() {
        let bytes = encode_raw(2, 2, vec![], None);
        assert!(matches!(decode_gif(&bytes), Err(DecodeError::Corrupt(_))));
    }
}
