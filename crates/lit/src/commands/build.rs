//! `lit build` command implementation.

use clap::Args;
use lit_build::{BuildConfig, StaticSiteBuilder};
use lit_playground::PlaygroundClient;
use lit_site::{ExampleAssembler, RefreshMode};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any example cannot be
    /// assembled, published, or rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config()?;
        let site = &config.site_resolved;

        output.info(&format!("Source directory: {}", site.source_dir.display()));
        output.info(&format!("Output directory: {}", site.output_dir.display()));
        output.info(&format!("Playground: {}", config.playground.url));

        let client = PlaygroundClient::new(&config.playground.url, config.playground.timeout());
        let assembler = ExampleAssembler::new(&site.source_dir, RefreshMode::Publish(&client));
        let builder = StaticSiteBuilder::new(BuildConfig::from(site));
        let report = builder.build(&site.manifest, &assembler)?;

        if report.examples == 0 {
            output.warning(&format!(
                "Manifest {} lists no examples",
                site.manifest.display()
            ));
        }
        output.success(&format!(
            "Built {} examples ({} pages) into {}",
            report.examples,
            report.pages.len(),
            site.output_dir.display()
        ));

        Ok(())
    }
}
