//! Page templates.
//!
//! Templates are loaded by name from the templates directory. Rendered
//! prose and code are already HTML, so templates mark them `|safe`; every
//! other value is auto-escaped.

use std::collections::BTreeMap;
use std::path::Path;

use lit_segments::Segment;
use lit_site::{Catalog, Example};
use minijinja::{Environment, context, path_loader};
use serde::Serialize;

pub(crate) const INDEX_TEMPLATE: &str = "index.html";
pub(crate) const EXAMPLE_TEMPLATE: &str = "example.html";
pub(crate) const NOT_FOUND_TEMPLATE: &str = "404.html";

/// Site-wide values available to every template as `site`.
#[derive(Debug, Default, Serialize)]
pub(crate) struct SiteData {
    /// Asset file name to short content hash.
    pub versions: BTreeMap<String, String>,
}

/// Neighbour link on an example page.
#[derive(Serialize)]
struct LinkData<'a> {
    id: &'a str,
    title: &'a str,
}

impl<'a> From<&'a Example> for LinkData<'a> {
    fn from(example: &'a Example) -> Self {
        Self {
            id: &example.id,
            title: &example.title,
        }
    }
}

/// An example as seen by templates.
#[derive(Serialize)]
struct ExampleData<'a> {
    id: &'a str,
    title: &'a str,
    reference: Option<&'a str>,
    /// One segment list per source file.
    files: &'a [Vec<Segment>],
}

impl<'a> From<&'a Example> for ExampleData<'a> {
    fn from(example: &'a Example) -> Self {
        Self {
            id: &example.id,
            title: &example.title,
            reference: example.reference(),
            files: &example.segments,
        }
    }
}

/// Template environment for one site.
pub(crate) struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Load templates lazily from `dir`.
    pub(crate) fn from_dir(dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.to_path_buf()));
        Self { env }
    }

    pub(crate) fn render_index(
        &self,
        catalog: &Catalog,
        site: &SiteData,
    ) -> Result<String, minijinja::Error> {
        let examples: Vec<LinkData<'_>> = catalog.examples().iter().map(LinkData::from).collect();
        self.env
            .get_template(INDEX_TEMPLATE)?
            .render(context! { examples => examples, site => site })
    }

    pub(crate) fn render_example(
        &self,
        catalog: &Catalog,
        example: &Example,
        site: &SiteData,
    ) -> Result<String, minijinja::Error> {
        let previous = catalog.previous(example).map(LinkData::from);
        let next = catalog.next(example).map(LinkData::from);
        self.env.get_template(EXAMPLE_TEMPLATE)?.render(context! {
            example => ExampleData::from(example),
            previous => previous,
            next => next,
            site => site,
        })
    }

    pub(crate) fn render_not_found(&self, site: &SiteData) -> Result<String, minijinja::Error> {
        self.env
            .get_template(NOT_FOUND_TEMPLATE)?
            .render(context! { site => site })
    }
}
