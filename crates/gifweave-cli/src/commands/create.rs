//! Build an animation from still images.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use gifweave_core::decode::decode_still_file;
use gifweave_core::encode::{write_gif, EncodeOptions};
use gifweave_core::ops::{build_from_stills, frame_duration_for_fps, list_image_files};
use gifweave_core::sequence::Size;

use super::SizeArgs;

const MIN_FPS: f64 = 0.5;
const MAX_FPS: f64 = 120.0;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Image files in playback order, or a single directory of images
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output GIF path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Frames per second (0.5-120)
    #[arg(long, default_value = "10", value_parser = parse_fps)]
    pub fps: f64,

    #[command(flatten)]
    pub size: SizeArgs,
}

pub fn run(args: CreateArgs) -> anyhow::Result<()> {
    let paths = collect_inputs(&args.inputs)?;

    let reference = if args.size.requested() {
        first_readable_size(&paths)
    } else {
        None
    };
    let target = args.size.resolve(reference);
    let duration_ms = frame_duration_for_fps(args.fps)?;

    tracing::info!(inputs = paths.len(), duration_ms, ?target, "building animation");

    let sequence = build_from_stills(&paths, duration_ms, target).context("Failed to build animation")?;

    write_gif(&sequence, &args.output, &EncodeOptions::uniform(duration_ms, 0))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let skipped = paths.len() - sequence.len();
    println!(
        "Wrote {} ({} frames, {} skipped)",
        args.output.display(),
        sequence.len(),
        skipped
    );
    Ok(())
}

/// A single directory expands to its files sorted by name; files are kept in order.
fn collect_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    match inputs {
        [dir] if dir.is_dir() => {
            list_image_files(dir).with_context(|| format!("Failed to list {}", dir.display()))
        }
        _ => Ok(inputs.to_vec()),
    }
}

fn first_readable_size(paths: &[PathBuf]) -> Option<Size> {
    paths
        .iter()
        .find_map(|p| decode_still_file(p).ok())
        .map(|frame| frame.size())
}

fn parse_fps(s: &str) -> Result<f64, String> {
    let fps: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !(MIN_FPS..=MAX_FPS).contains(&fps) {
        return Err(format!("fps must be between {} and {}", MIN_FPS, MAX_FPS));
    }
    Ok(fps)
}
