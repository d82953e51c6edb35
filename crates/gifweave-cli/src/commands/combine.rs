//! Combine two animations side by side.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use gifweave_core::decode::decode_sequence_file;
use gifweave_core::encode::{write_gif, EncodeOptions};
use gifweave_core::ops::{combine_horizontal, suggested_fps};

#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Animation placed on the left
    pub first: PathBuf,

    /// Animation placed on the right
    pub second: PathBuf,

    /// Output GIF path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output frame rate (defaults to the faster input's rate)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: Option<u32>,
}

pub fn run(args: CombineArgs) -> anyhow::Result<()> {
    let first = decode_sequence_file(&args.first)
        .with_context(|| format!("Failed to load {}", args.first.display()))?;
    let second = decode_sequence_file(&args.second)
        .with_context(|| format!("Failed to load {}", args.second.display()))?;

    let fps = args.fps.unwrap_or_else(|| suggested_fps(&first, &second));
    tracing::info!(
        left_frames = first.len(),
        right_frames = second.len(),
        fps,
        "combining"
    );

    let combined = combine_horizontal(&first, &second, fps as f64).context("Failed to combine animations")?;

    write_gif(&combined, &args.output, &EncodeOptions::preserving(&combined))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let size = combined.size();
    println!(
        "Wrote {} ({} frames, {}x{}, {} fps)",
        args.output.display(),
        combined.len(),
        size.width,
        size.height,
        fps
    );
    Ok(())
}
