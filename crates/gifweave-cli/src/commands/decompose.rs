//! Split an animation into numbered PNG stills.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use gifweave_core::decode::decode_sequence_file;
use gifweave_core::encode::write_stills;
use gifweave_core::ops::decompose;

use super::SizeArgs;

#[derive(Args, Debug)]
pub struct DecomposeArgs {
    /// Animation to split
    pub input: PathBuf,

    /// Directory the stills are written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// File name prefix (defaults to the input file stem)
    #[arg(long)]
    pub base_name: Option<String>,

    #[command(flatten)]
    pub size: SizeArgs,
}

pub fn run(args: DecomposeArgs) -> anyhow::Result<()> {
    let sequence = decode_sequence_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let target = args.size.resolve(Some(sequence.size()));
    let stills = decompose(&sequence, target).context("Failed to split animation")?;

    let base_name = args.base_name.clone().unwrap_or_else(|| default_base_name(&args.input));
    tracing::info!(frames = stills.len(), base_name = %base_name, ?target, "writing stills");

    let written = write_stills(&stills, &args.output, &base_name)
        .with_context(|| format!("Failed to write stills to {}", args.output.display()))?;

    println!("Wrote {} stills to {}", written.len(), args.output.display());
    Ok(())
}

fn default_base_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string())
}
