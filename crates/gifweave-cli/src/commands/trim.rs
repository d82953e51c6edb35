//! Crop every frame of an animation.
//!
//! The requested rectangle is applied as two corner drags on a crop session
//! bounded by the first frame, so it is clamped exactly like an interactive
//! edit would be. Requests the session would refuse are reported as errors
//! instead of being dropped.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::Args;
use gifweave_core::crop_rect::{CropSession, Point, Rect, MIN_SIZE};
use gifweave_core::decode::decode_sequence_file;
use gifweave_core::encode::{write_gif, EncodeOptions};
use gifweave_core::ops::{crop, PixelRect};

#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Animation to crop
    pub input: PathBuf,

    /// Output GIF path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Crop rectangle as LEFT,TOP,RIGHT,BOTTOM in pixels
    #[arg(long)]
    pub rect: RectArg,
}

/// `LEFT,TOP,RIGHT,BOTTOM` from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectArg {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl FromStr for RectArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<f64>().map_err(|_| format!("'{}' is not a number", v.trim())))
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            &[left, top, right, bottom] => Ok(Self {
                left,
                top,
                right,
                bottom,
            }),
            _ => Err(format!("expected LEFT,TOP,RIGHT,BOTTOM, got {} values", values.len())),
        }
    }
}

pub fn run(args: TrimArgs) -> anyhow::Result<()> {
    let sequence = decode_sequence_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let pixel_rect = constrain(args.rect, Rect::from_size(sequence.size()))?;
    tracing::info!(
        left = pixel_rect.left,
        top = pixel_rect.top,
        right = pixel_rect.right,
        bottom = pixel_rect.bottom,
        "cropping"
    );

    let trimmed = crop(&sequence, pixel_rect).context("Failed to crop animation")?;

    write_gif(&trimmed, &args.output, &EncodeOptions::preserving(&trimmed))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} ({} frames, {}x{})",
        args.output.display(),
        trimmed.len(),
        pixel_rect.width(),
        pixel_rect.height()
    );
    Ok(())
}

/// Drag the top-left corner, then the bottom-right corner, to the requested edges.
///
/// Edges outside `bounds` are clamped to it. Fails when the request is
/// inverted or empty, or when the part inside `bounds` is smaller than
/// [`MIN_SIZE`] on either axis.
fn constrain(requested: RectArg, bounds: Rect) -> anyhow::Result<PixelRect> {
    let wanted = Rect::new(requested.left, requested.top, requested.right, requested.bottom);
    if !(wanted.width() > 0.0 && wanted.height() > 0.0) {
        bail!(
            "Invalid crop area {},{},{},{}: right must exceed left and bottom must exceed top",
            requested.left,
            requested.top,
            requested.right,
            requested.bottom
        );
    }

    let visible = match wanted.intersect(&bounds) {
        Some(rect) if rect.width() >= MIN_SIZE && rect.height() >= MIN_SIZE => rect,
        _ => bail!(
            "Crop area must cover at least {}x{} pixels of the {}x{} image",
            MIN_SIZE,
            MIN_SIZE,
            bounds.width(),
            bounds.height()
        ),
    };

    let mut session = CropSession::new(bounds);
    session.drag(
        Point::new(bounds.left, bounds.top),
        Point::new(requested.left, requested.top),
    );
    session.drag(
        Point::new(bounds.right, bounds.bottom),
        Point::new(requested.right, requested.bottom),
    );

    let rect = session.rect();
    if rect != visible {
        bail!("Crop area {:?} could not be applied (got {:?})", visible, rect);
    }
    if rect != wanted {
        tracing::warn!(?requested, ?rect, "crop rectangle clamped to the image");
    }
    Ok(session.pixel_rect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifweave_core::sequence::Size;

    fn bounds() -> Rect {
        Rect::from_size(Size::new(200, 100))
    }

    fn rect(left: f64, top: f64, right: f64, bottom: f64) -> RectArg {
        RectArg {
            left,
            top,
            right,
            bottom,
        }
    }

    #[test]
    fn test_parse_rect() {
        let parsed: RectArg = "10, 20,110.5,90".parse().unwrap();
        assert_eq!(parsed, rect(10.0, 20.0, 110.5, 90.0));

        assert!("1,2,3".parse::<RectArg>().is_err());
        assert!("1,2,3,4,5".parse::<RectArg>().is_err());
        assert!("a,b,c,d".parse::<RectArg>().is_err());
    }

    #[test]
    fn test_valid_rect_passes_through() {
        assert_eq!(
            constrain(rect(10.0, 20.0, 110.0, 90.0), bounds()).unwrap(),
            PixelRect::new(10, 20, 110, 90)
        );
    }

    #[test]
    fn test_fractional_edges_truncate() {
        assert_eq!(
            constrain(rect(10.7, 20.2, 110.9, 90.5), bounds()).unwrap(),
            PixelRect::new(10, 20, 110, 90)
        );
    }

    #[test]
    fn test_out_of_bounds_is_clamped() {
        assert_eq!(
            constrain(rect(-50.0, -5.0, 500.0, 300.0), bounds()).unwrap(),
            PixelRect::new(0, 0, 200, 100)
        );
        assert_eq!(
            constrain(rect(150.0, 20.0, 260.0, 90.0), bounds()).unwrap(),
            PixelRect::new(150, 20, 200, 90)
        );
    }

    #[test]
    fn test_minimum_size_is_accepted() {
        assert_eq!(
            constrain(rect(184.0, 84.0, 200.0, 100.0), bounds()).unwrap(),
            PixelRect::new(184, 84, 200, 100)
        );
    }

    #[test]
    fn test_inverted_rect_is_rejected() {
        assert!(constrain(rect(150.0, 20.0, 50.0, 90.0), bounds()).is_err());
        assert!(constrain(rect(10.0, 90.0, 110.0, 20.0), bounds()).is_err());
        assert!(constrain(rect(10.0, 20.0, 10.0, 90.0), bounds()).is_err());
        assert!(constrain(rect(f64::NAN, 20.0, 110.0, 90.0), bounds()).is_err());
    }

    #[test]
    fn test_too_small_rect_is_rejected() {
        assert!(constrain(rect(0.0, 0.0, 10.0, 10.0), bounds()).is_err());
        assert!(constrain(rect(100.0, 10.0, 105.0, 60.0), bounds()).is_err());
    }

    #[test]
    fn test_rect_mostly_outside_is_rejected() {
        // Only 10 pixels of width land inside the image.
        assert!(constrain(rect(190.0, 10.0, 400.0, 60.0), bounds()).is_err());
        assert!(constrain(rect(300.0, 10.0, 400.0, 60.0), bounds()).is_err());
    }
}
