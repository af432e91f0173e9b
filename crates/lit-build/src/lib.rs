//! Static site generation for literate example sites.
//!
//! [`StaticSiteBuilder`] turns a catalog of assembled examples into an
//! index page, one extensionless page per example, and a 404 page, all
//! rendered from minijinja templates in the configured templates directory.
//! Static assets are copied alongside, and a short content hash of each
//! versioned asset is exposed to templates for cache busting.

mod assets;
mod builder;
mod template;

pub use assets::{ASSET_VERSION_LEN, asset_version};
pub use builder::{BuildConfig, BuildError, BuildReport, StaticSiteBuilder};
