//! Show animation information.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use gifweave_core::decode::decode_sequence_file;
use gifweave_core::sequence::FrameSequence;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Animation to inspect
    pub input: PathBuf,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let sequence = decode_sequence_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    println!("File: {}", args.input.display());
    print!("{}", describe(&sequence));
    Ok(())
}

fn describe(sequence: &FrameSequence) -> String {
    let size = sequence.size();
    let loops = match sequence.loop_count() {
        0 => "forever".to_string(),
        n => n.to_string(),
    };
    let durations = sequence
        .durations()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!("  Frames: {}\n", sequence.len()));
    out.push_str(&format!("  Size: {}x{}\n", size.width, size.height));
    out.push_str(&format!("  Loop: {}\n", loops));
    out.push_str(&format!(
        "  Duration: {} ms ({:.2} fps average)\n",
        sequence.total_duration_ms(),
        sequence.average_fps()
    ));
    out.push_str(&format!("  Frame durations (ms): {}\n", durations));
    out
}
