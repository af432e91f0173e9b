//! CLI error types.

use lit_build::BuildError;
use lit_config::ConfigError;
use lit_renderer::UnsupportedLanguage;
use lit_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Language(#[from] UnsupportedLanguage),
}
