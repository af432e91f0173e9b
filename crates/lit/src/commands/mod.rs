//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod segments;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use segments::SegmentsArgs;

use std::path::PathBuf;

use clap::Args;
use lit_config::{CliSettings, Config};

use crate::error::CliError;

/// Config and path overrides shared by site commands.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover lit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Example source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Templates directory (overrides config).
    #[arg(short, long)]
    templates_dir: Option<PathBuf>,

    /// Manifest file (overrides config).
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Playground share URL (overrides config).
    #[arg(long, env = "LIT_PLAYGROUND_URL")]
    playground_url: Option<String>,

    /// Enable verbose output (per-example progress and publish requests).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration with these overrides applied.
    pub(crate) fn load_config(self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            templates_dir: self.templates_dir,
            manifest: self.manifest,
            playground_url: self.playground_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        match &config.config_path {
            Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
            None => tracing::info!("No lit.toml found, using defaults"),
        }
        Ok(config)
    }
}
