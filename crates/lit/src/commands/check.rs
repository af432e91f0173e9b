//! `lit check` command implementation.

use clap::Args;
use lit_site::{Catalog, ExampleAssembler, RefreshMode};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Never publishes and never writes; a stale hash file is an error.
    ///
    /// # Errors
    ///
    /// Returns the first assembly error, including stale hash files.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config()?;
        let site = &config.site_resolved;

        let assembler = ExampleAssembler::new(&site.source_dir, RefreshMode::Verify);
        let catalog = Catalog::from_manifest(&site.manifest, &assembler)?;

        let unpublished = catalog
            .examples()
            .iter()
            .filter(|e| e.reference().is_none())
            .count();
        output.success(&format!(
            "{} examples OK ({unpublished} without playground link)",
            catalog.len()
        ));

        Ok(())
    }
}
