//! Static asset copying and versioning.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use sha1::{Digest, Sha1};

use crate::builder::BuildError;

/// Number of hex characters in an asset version.
pub const ASSET_VERSION_LEN: usize = 8;

/// Short content hash used as a cache-busting query parameter.
#[must_use]
pub fn asset_version(bytes: &[u8]) -> String {
    let mut digest = hex::encode(Sha1::digest(bytes));
    digest.truncate(ASSET_VERSION_LEN);
    digest
}

/// Versions of the named assets in `dir`, keyed by file name.
pub(crate) fn asset_versions(
    dir: &Path,
    names: &[String],
) -> Result<BTreeMap<String, String>, BuildError> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            let bytes = fs::read(&path).map_err(|e| BuildError::asset(&path, e))?;
            Ok((name.clone(), asset_version(&bytes)))
        })
        .collect()
}

/// Fail unless every named asset exists in `dir`.
pub(crate) fn check_assets(dir: &Path, names: &[String]) -> Result<(), BuildError> {
    match names.iter().map(|name| dir.join(name)).find(|p| !p.is_file()) {
        Some(missing) => Err(BuildError::MissingAsset(missing)),
        None => Ok(()),
    }
}

/// Copy the named assets from `from` into `to`.
pub(crate) fn copy_assets(from: &Path, to: &Path, names: &[String]) -> Result<(), BuildError> {
    for name in names {
        let source = from.join(name);
        let target = to.join(name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        fs::copy(&source, &target).map_err(|e| BuildError::asset(&source, e))?;
        tracing::debug!(path = %source.display(), "Copied asset");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_asset_version_is_sha1_prefix() {
        // sha1("abc") = a9993e364706816aba3e25717850c26c9cd0d89d
        assert_eq!(asset_version(b"abc"), "a9993e36");
    }

    #[test]
    fn test_asset_versions_keyed_by_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("site.css"), "abc").unwrap();
        let versions = asset_versions(tmp.path(), &["site.css".to_owned()]).unwrap();
        assert_eq!(versions.get("site.css").map(String::as_str), Some("a9993e36"));
    }

    #[test]
    fn test_missing_asset_is_reported() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("site.css"), "").unwrap();
        let err = check_assets(tmp.path(), &["site.css".to_owned(), "site.js".to_owned()])
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingAsset(p) if p == tmp.path().join("site.js")));
    }

    #[test]
    fn test_copy_assets() {
        let from = TempDir::new().unwrap();
        let to = TempDir::new().unwrap();
        fs::create_dir_all(from.path().join("img")).unwrap();
        fs::write(from.path().join("img/play.png"), [0x89, 0x50]).unwrap();

        copy_assets(from.path(), to.path(), &["img/play.png".to_owned()]).unwrap();
        assert_eq!(fs::read(to.path().join("img/play.png")).unwrap(), vec![0x89, 0x50]);
    }
}
