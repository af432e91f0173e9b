//! Configuration management for literate example sites.
//!
//! Parses `lit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `playground.url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override example source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override templates directory.
    pub templates_dir: Option<PathBuf>,
    /// Override manifest path.
    pub manifest: Option<PathBuf>,
    /// Override playground share URL.
    pub playground_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lit.toml";

const DEFAULT_PLAYGROUND_URL: &str = "https://play.golang.org/share";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ASSETS: [&str; 2] = ["site.css", "site.js"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site layout (paths are relative strings from TOML).
    #[serde(default)]
    site: SiteConfigRaw,
    /// Playground publishing configuration.
    pub playground: PlaygroundConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source_dir: Option<String>,
    manifest: Option<String>,
    templates_dir: Option<String>,
    output_dir: Option<String>,
    assets: Option<Vec<String>>,
    versioned_assets: Option<Vec<String>>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory containing one subdirectory per example.
    pub source_dir: PathBuf,
    /// Manifest listing examples in page order.
    pub manifest: PathBuf,
    /// Directory with page templates and static assets.
    pub templates_dir: PathBuf,
    /// Directory the site is written to.
    pub output_dir: PathBuf,
    /// Asset filenames copied from the templates directory to the output.
    pub assets: Vec<String>,
    /// Asset filenames whose content hash is exposed to templates.
    pub versioned_assets: Vec<String>,
}

impl SiteConfig {
    fn with_base(base: &Path) -> Self {
        let assets: Vec<String> = DEFAULT_ASSETS.iter().map(|&a| a.to_owned()).collect();
        Self {
            source_dir: base.join("examples"),
            manifest: base.join("examples.txt"),
            templates_dir: base.join("templates"),
            output_dir: base.join("public"),
            versioned_assets: assets.clone(),
            assets,
        }
    }
}

/// Playground configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Share endpoint receiving runnable sources.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PLAYGROUND_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PlaygroundConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`playground.url`").
        field: String,
        /// Error message (e.g., "${`PLAYGROUND_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lit.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(templates_dir) = &settings.templates_dir {
            self.site_resolved.templates_dir.clone_from(templates_dir);
        }
        if let Some(manifest) = &settings.manifest {
            self.site_resolved.manifest.clone_from(manifest);
        }
        if let Some(url) = &settings.playground_url {
            self.playground.url.clone_from(url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            playground: PlaygroundConfig::default(),
            site_resolved: SiteConfig::with_base(base),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_playground()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        let site = &self.site_resolved;
        for (path, field) in [
            (&site.source_dir, "site.source_dir"),
            (&site.manifest, "site.manifest"),
            (&site.templates_dir, "site.templates_dir"),
            (&site.output_dir, "site.output_dir"),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{field} cannot be empty")));
            }
        }
        for asset in &site.assets {
            require_non_empty(asset, "site.assets")?;
        }
        for asset in &site.versioned_assets {
            require_non_empty(asset, "site.versioned_assets")?;
        }
        Ok(())
    }

    fn validate_playground(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.playground.url, "playground.url")?;
        require_http_url(&self.playground.url, "playground.url")?;
        if self.playground.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "playground.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.playground.url = expand::expand_env(&self.playground.url, "playground.url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// Explicitly empty path strings are rejected rather than resolved to the
    /// config directory itself.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let resolve = |path: Option<&str>, default: &str, field: &str| match path {
            Some("") => Err(ConfigError::Validation(format!("{field} cannot be empty"))),
            Some(path) => Ok(config_dir.join(path)),
            None => Ok(config_dir.join(default)),
        };

        let defaults = SiteConfig::with_base(config_dir);
        self.site_resolved = SiteConfig {
            source_dir: resolve(self.site.source_dir.as_deref(), "examples", "site.source_dir")?,
            manifest: resolve(self.site.manifest.as_deref(), "examples.txt", "site.manifest")?,
            templates_dir: resolve(
                self.site.templates_dir.as_deref(),
                "templates",
                "site.templates_dir",
            )?,
            output_dir: resolve(self.site.output_dir.as_deref(), "public", "site.output_dir")?,
            assets: self.site.assets.clone().unwrap_or(defaults.assets),
            versioned_assets: self
                .site
                .versioned_assets
                .clone()
                .unwrap_or(defaults.versioned_assets),
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        let site = &config.site_resolved;
        assert_eq!(site.source_dir, PathBuf::from("/test/examples"));
        assert_eq!(site.manifest, PathBuf::from("/test/examples.txt"));
        assert_eq!(site.templates_dir, PathBuf::from("/test/templates"));
        assert_eq!(site.output_dir, PathBuf::from("/test/public"));
        assert_eq!(site.assets, vec!["site.css", "site.js"]);
        assert_eq!(site.versioned_assets, vec!["site.css", "site.js"]);
        assert_eq!(config.playground.url, "https://play.golang.org/share");
        assert_eq!(config.playground.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.playground.url, "https://play.golang.org/share");
        assert_eq!(config.playground.timeout_secs, 30);
    }

    #[test]
    fn test_parse_playground_config() {
        let toml = r#"
[playground]
url = "http://localhost:8080/share"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.playground.url, "http://localhost:8080/share");
        assert_eq!(config.playground.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[site]
source_dir = "src/examples"
output_dir = "/var/www/site"
assets = ["site.css", "site.js", "favicon.ico"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();

        let site = &config.site_resolved;
        assert_eq!(site.source_dir, PathBuf::from("/project/src/examples"));
        assert_eq!(site.output_dir, PathBuf::from("/var/www/site"));
        assert_eq!(site.manifest, PathBuf::from("/project/examples.txt"));
        assert_eq!(site.templates_dir, PathBuf::from("/project/templates"));
        assert_eq!(site.assets, vec!["site.css", "site.js", "favicon.ico"]);
        assert_eq!(site.versioned_assets, vec!["site.css", "site.js"]);
    }

    #[test]
    fn test_resolve_paths_rejects_empty_path() {
        let toml = r#"
[site]
output_dir = ""
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.resolve_paths(Path::new("/project")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.output_dir"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let settings = CliSettings {
            source_dir: Some(PathBuf::from("/custom/examples")),
            output_dir: Some(PathBuf::from("/custom/out")),
            playground_url: Some("http://localhost/share".to_owned()),
            ..Default::default()
        };
        config.apply_cli_settings(&settings);

        assert_eq!(
            config.site_resolved.source_dir,
            PathBuf::from("/custom/examples")
        );
        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/custom/out"));
        assert_eq!(
            config.site_resolved.templates_dir,
            PathBuf::from("/test/templates")
        );
        assert_eq!(config.playground.url, "http://localhost/share");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.site_resolved, SiteConfig::with_base(Path::new("/test")));
    }

    #[test]
    fn test_expand_env_vars_playground_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_LIT_PLAYGROUND", "https://play.test.com/share");
        }

        let toml = r#"
[playground]
url = "${TEST_LIT_PLAYGROUND}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.playground.url, "https://play.test.com/share");

        unsafe {
            std::env::remove_var("TEST_LIT_PLAYGROUND");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_LIT_CONFIG_VAR");
        }

        let toml = r#"
[playground]
url = "${MISSING_LIT_CONFIG_VAR}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_LIT_CONFIG_VAR"));
        assert!(err.to_string().contains("playground.url"));
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected Validation error, got: {err:?}"
        );
        let msg = err.to_string();
        for substring in expected_substrings {
            assert!(msg.contains(substring), "{msg:?} should contain {substring:?}");
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_playground_url_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.playground.url = "play.golang.org/share".to_owned();
        assert_validation_error(&config, &["playground.url", "http"]);
    }

    #[test]
    fn test_validate_playground_url_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.playground.url = String::new();
        assert_validation_error(&config, &["playground.url", "empty"]);
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.playground.timeout_secs = 0;
        assert_validation_error(&config, &["timeout_secs"]);
    }

    #[test]
    fn test_validate_empty_asset_name() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.assets.push(String::new());
        assert_validation_error(&config, &["site.assets"]);
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lit.toml");
        std::fs::write(
            &path,
            r#"
[site]
manifest = "list.txt"

[playground]
url = "http://localhost:3999/share"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path, Some(path.clone()));
        assert_eq!(config.site_resolved.manifest, tmp.path().join("list.txt"));
        assert_eq!(config.site_resolved.source_dir, tmp.path().join("examples"));
        assert_eq!(config.playground.url, "http://localhost:3999/share");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lit.toml");
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_load_rejects_invalid_cli_override() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lit.toml");
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            playground_url: Some("ftp://example.com".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(err.to_string().contains("playground.url"));
    }
}
