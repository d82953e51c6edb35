//! gifweave CLI: command-line interface for animated GIF editing.
//!
//! Usage:
//!   gifweave combine <A> <B> -o <OUT>     Place two animations side by side
//!   gifweave create <INPUT>... -o <OUT>   Build an animation from still images
//!   gifweave decompose <GIF> -o <DIR>     Split an animation into PNG stills
//!   gifweave trim <GIF> -o <OUT> --rect   Crop every frame of an animation
//!   gifweave info <GIF>                   Show frame count, size and timing

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{
    combine::CombineArgs, create::CreateArgs, decompose::DecomposeArgs, info::InfoArgs,
    trim::TrimArgs,
};

#[derive(Parser)]
#[command(
    name = "gifweave",
    about = "Combine, build, split and crop animated GIFs",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place two animations side by side in one GIF
    Combine(CombineArgs),

    /// Build an animated GIF from still images or a directory of them
    Create(CreateArgs),

    /// Write every frame of an animation as a numbered PNG
    Decompose(DecomposeArgs),

    /// Crop every frame of an animation, keeping its timing
    Trim(TrimArgs),

    /// Show frame count, size, loop count and durations
    Info(InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Combine(args) => commands::combine::run(args),
        Commands::Create(args) => commands::create::run(args),
        Commands::Decompose(args) => commands::decompose::run(args),
        Commands::Trim(args) => commands::trim::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
