//! Literate example site generator.
//!
//! Provides commands for:
//! - `build`: Assemble every example, refresh playground links and write the site
//! - `check`: Assemble every example and fail on stale hash files, writing nothing
//! - `segments`: Show how one source file splits into segments

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, SegmentsArgs};
use output::Output;

/// Literate example site generator.
#[derive(Parser)]
#[command(name = "lit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site.
    Build(BuildArgs),
    /// Verify that every example renders and every hash file is current.
    Check(CheckArgs),
    /// Print the segments of one source file.
    Segments(SegmentsArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.site.verbose,
            Self::Check(args) => args.site.verbose,
            Self::Segments(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Segments(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
