//! Static site builder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lit_config::SiteConfig;
use lit_site::{Catalog, ExampleAssembler, SiteError};

use crate::assets::{asset_versions, check_assets, copy_assets};
use crate::template::{SiteData, Templates};

/// Name of the index page in the output directory.
const INDEX_PAGE: &str = "index.html";
/// Name of the not-found page in the output directory.
const NOT_FOUND_PAGE: &str = "404.html";

/// Configuration for static site building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory with page templates and static assets.
    pub templates_dir: PathBuf,
    /// Directory the site is written to.
    pub output_dir: PathBuf,
    /// Assets copied verbatim from the templates directory.
    pub assets: Vec<String>,
    /// Assets whose short content hash templates can reference.
    pub versioned_assets: Vec<String>,
}

impl From<&SiteConfig> for BuildConfig {
    fn from(site: &SiteConfig) -> Self {
        Self {
            templates_dir: site.templates_dir.clone(),
            output_dir: site.output_dir.clone(),
            assets: site.assets.clone(),
            versioned_assets: site.versioned_assets.clone(),
        }
    }
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("missing asset: {}", .0.display())]
    MissingAsset(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Reading an asset failed; a missing file gets its own variant.
    pub(crate) fn asset(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::MissingAsset(path.to_path_buf()),
            _ => Self::io(path, source),
        }
    }
}

/// Summary of a completed build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of example pages written.
    pub examples: usize,
    /// Every page written, in write order.
    pub pages: Vec<PathBuf>,
}

/// Builds a static example site from a manifest.
pub struct StaticSiteBuilder {
    config: BuildConfig,
    templates: Templates,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        let templates = Templates::from_dir(&config.templates_dir);
        Self { config, templates }
    }

    /// Assemble every example listed in `manifest`, then write the site.
    ///
    /// Any failure while assembling stops the build before the output
    /// directory is touched.
    ///
    /// # Errors
    ///
    /// Returns the first assembly, template, or I/O error.
    pub fn build(
        &self,
        manifest: &Path,
        assembler: &ExampleAssembler<'_>,
    ) -> Result<BuildReport, BuildError> {
        let catalog = Catalog::from_manifest(manifest, assembler)?;
        self.build_catalog(&catalog)
    }

    /// Render every page of `catalog` and write the site.
    ///
    /// Pages are rendered in memory first, so a template error leaves the
    /// output directory untouched.
    ///
    /// # Errors
    ///
    /// Returns the first template or I/O error.
    pub fn build_catalog(&self, catalog: &Catalog) -> Result<BuildReport, BuildError> {
        let out = &self.config.output_dir;
        let templates_dir = &self.config.templates_dir;

        check_assets(templates_dir, &self.config.assets)?;
        let site = SiteData {
            versions: asset_versions(templates_dir, &self.config.versioned_assets)?,
        };

        tracing::info!("Rendering index");
        let mut pages = Vec::with_capacity(catalog.len() + 2);
        pages.push((out.join(INDEX_PAGE), self.templates.render_index(catalog, &site)?));

        tracing::info!(count = catalog.len(), "Rendering examples");
        for example in catalog.examples() {
            let html = self.templates.render_example(catalog, example, &site)?;
            pages.push((out.join(&example.id), html));
        }

        tracing::info!("Rendering 404 page");
        pages.push((out.join(NOT_FOUND_PAGE), self.templates.render_not_found(&site)?));

        fs::create_dir_all(out).map_err(|e| BuildError::io(out, e))?;
        copy_assets(templates_dir, out, &self.config.assets)?;

        let mut report = BuildReport {
            examples: catalog.len(),
            pages: Vec::with_capacity(pages.len()),
        };
        for (path, html) in pages {
            fs::write(&path, html).map_err(|e| BuildError::io(&path, e))?;
            report.pages.push(path);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use lit_playground::RecordingPublisher;
    use lit_site::RefreshMode;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const INDEX: &str = "<link href=\"site.css?{{ site.versions['site.css'] }}\">\
                         {% for e in examples %}<a href=\"{{ e.id }}\">{{ e.title }}</a>{% endfor %}\
                         {% include 'footer.html' %}";
    const EXAMPLE: &str = "<h1>{{ example.title }}</h1>\
                           {% if example.reference %}<a href=\"https://play.golang.org/p/{{ example.reference }}\">run</a>{% endif %}\
                           {% for file in example.files %}{% for seg in file %}\
                           {{ seg.docs_rendered|safe }}{{ seg.code_rendered|safe }}\
                           {% endfor %}{% endfor %}\
                           {% if next %}<a href=\"{{ next.id }}\">{{ next.title }}</a>{% endif %}";
    const NOT_FOUND: &str = "<h1>Not found</h1>{% include 'footer.html' %}";
    const FOOTER: &str = "<footer>lit</footer>";

    struct Fixture {
        tmp: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = TempDir::new().unwrap();
            let root = tmp.path();

            let templates = root.join("templates");
            fs::create_dir_all(&templates).unwrap();
            for (name, contents) in [
                ("index.html", INDEX),
                ("example.html", EXAMPLE),
                ("404.html", NOT_FOUND),
                ("footer.html", FOOTER),
                ("site.css", "abc"),
                ("site.js", "// js"),
            ] {
                fs::write(templates.join(name), contents).unwrap();
            }

            for (id, source) in [
                ("hello-world", "// Say hello.\npackage main\n"),
                ("values", "// Values.\npackage main\n\nvar x = 1\n"),
            ] {
                let dir = root.join("examples").join(id);
                fs::create_dir_all(&dir).unwrap();
                fs::write(dir.join(format!("{id}.go")), source).unwrap();
            }
            fs::write(
                root.join("examples.txt"),
                "hello-world|Hello World\nvalues|Values\n",
            )
            .unwrap();

            Self { tmp }
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.tmp.path().join(rel)
        }

        fn builder(&self) -> StaticSiteBuilder {
            StaticSiteBuilder::new(BuildConfig {
                templates_dir: self.path("templates"),
                output_dir: self.path("public"),
                assets: vec!["site.css".to_owned(), "site.js".to_owned()],
                versioned_assets: vec!["site.css".to_owned()],
            })
        }

        fn build(&self, publisher: &RecordingPublisher) -> Result<BuildReport, BuildError> {
            let assembler =
                ExampleAssembler::new(self.path("examples"), RefreshMode::Publish(publisher));
            self.builder().build(&self.path("examples.txt"), &assembler)
        }
    }

    #[test]
    fn test_build_writes_all_pages() {
        let fixture = Fixture::new();
        let publisher = RecordingPublisher::new();

        let report = fixture.build(&publisher).unwrap();

        assert_eq!(report.examples, 2);
        assert_eq!(
            report.pages,
            vec![
                fixture.path("public/index.html"),
                fixture.path("public/hello-world"),
                fixture.path("public/values"),
                fixture.path("public/404.html"),
            ]
        );
        assert_eq!(
            fs::read_to_string(fixture.path("public/index.html")).unwrap(),
            "<link href=\"site.css?a9993e36\">\
             <a href=\"hello-world\">Hello World</a><a href=\"values\">Values</a>\
             <footer>lit</footer>"
        );
        assert_eq!(
            fs::read_to_string(fixture.path("public/404.html")).unwrap(),
            "<h1>Not found</h1><footer>lit</footer>"
        );
        assert_eq!(fs::read_to_string(fixture.path("public/site.js")).unwrap(), "// js");
    }

    #[test]
    fn test_example_page_content() {
        let fixture = Fixture::new();
        let publisher = RecordingPublisher::new();
        fixture.build(&publisher).unwrap();

        let hello = fs::read_to_string(fixture.path("public/hello-world")).unwrap();
        assert!(hello.starts_with("<h1>Hello World</h1>"));
        assert!(hello.contains("<a href=\"https://play.golang.org/p/token-1\">run</a>"));
        assert!(hello.contains("<p>Say hello.</p>"));
        assert!(hello.contains("<pre class=\"chroma\">"));
        assert!(hello.ends_with("<a href=\"values\">Values</a>"));

        let values = fs::read_to_string(fixture.path("public/values")).unwrap();
        assert!(values.contains("token-2"));
        assert!(!values.contains("<a href=\"hello-world\">"), "last page has no next link");
    }

    #[test]
    fn test_rebuild_does_not_republish() {
        let fixture = Fixture::new();
        let publisher = RecordingPublisher::new();
        fixture.build(&publisher).unwrap();
        fixture.build(&publisher).unwrap();
        assert_eq!(publisher.calls(), 2);
    }

    #[test]
    fn test_failed_assembly_writes_nothing() {
        let fixture = Fixture::new();
        fs::write(
            fixture.path("examples.txt"),
            "hello-world|Hello World\nmissing|Missing\n",
        )
        .unwrap();
        let publisher = RecordingPublisher::new();

        let err = fixture.build(&publisher).unwrap_err();

        assert!(matches!(err, BuildError::Site(SiteError::MissingSourceFile(_))));
        assert!(!fixture.path("public").exists());
    }

    #[test]
    fn test_publish_failure_writes_nothing() {
        let fixture = Fixture::new();
        let publisher = RecordingPublisher::failing();

        let err = fixture.build(&publisher).unwrap_err();

        assert!(matches!(err, BuildError::Site(SiteError::Publish { .. })));
        assert!(!fixture.path("public").exists());
    }

    #[test]
    fn test_template_error_writes_nothing() {
        let fixture = Fixture::new();
        fs::write(fixture.path("templates/404.html"), "{% if %}").unwrap();
        let publisher = RecordingPublisher::new();

        let err = fixture.build(&publisher).unwrap_err();

        assert!(matches!(err, BuildError::Template(_)));
        assert!(!fixture.path("public").exists());
    }

    #[test]
    fn test_missing_asset() {
        let fixture = Fixture::new();
        fs::remove_file(fixture.path("templates/site.js")).unwrap();
        let publisher = RecordingPublisher::new();

        let err = fixture.build(&publisher).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("missing asset: {}", fixture.path("templates/site.js").display())
        );
        assert!(!fixture.path("public").exists());
    }

    #[test]
    fn test_default_templates_render() {
        let fixture = Fixture::new();
        let templates_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        let builder = StaticSiteBuilder::new(BuildConfig {
            templates_dir,
            output_dir: fixture.path("public"),
            assets: vec!["site.css".to_owned(), "site.js".to_owned()],
            versioned_assets: vec!["site.css".to_owned(), "site.js".to_owned()],
        });
        let publisher = RecordingPublisher::new();
        let assembler =
            ExampleAssembler::new(fixture.path("examples"), RefreshMode::Publish(&publisher));

        builder
            .build(&fixture.path("examples.txt"), &assembler)
            .unwrap();

        let index = fs::read_to_string(fixture.path("public/index.html")).unwrap();
        assert!(index.contains("<a href=\"hello-world\">Hello World</a>"));
        let hello = fs::read_to_string(fixture.path("public/hello-world")).unwrap();
        assert!(hello.contains("https://go.dev/play/p/token-1"));
        assert!(hello.contains("codeLines.push(\"package main\\n\");"));
        assert!(hello.contains("rel=\"next\">Values</a>"));
        assert!(fixture.path("public/404.html").is_file());
    }

    #[test]
    fn test_build_config_from_site_config() {
        let site = SiteConfig {
            templates_dir: PathBuf::from("/t"),
            output_dir: PathBuf::from("/o"),
            assets: vec!["a.css".to_owned()],
            ..SiteConfig::default()
        };
        let config = BuildConfig::from(&site);
        assert_eq!(config.templates_dir, PathBuf::from("/t"));
        assert_eq!(config.output_dir, PathBuf::from("/o"));
        assert_eq!(config.assets, vec!["a.css"]);
        assert!(config.versioned_assets.is_empty());
    }
}
