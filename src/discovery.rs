// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale discovery
//!
//! Finds `values-<code>/strings.xml` under the resource directory and
//! turns each hit into a [`LocaleCode`]. A project without any translated
//! resources simply yields an empty set.

use crate::error::{Result, SyncError};
use crate::types::{LocaleCode, LocaleSet};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Resource directory scanned when none is given
pub const DEFAULT_RESOURCE_DIR: &str = "core/common/src/main/res";
pub const VALUES_PREFIX: &str = "values-";
pub const STRINGS_FILE: &str = "strings.xml";

/// Extract locale codes from `.../values-<code>/strings.xml` style paths.
///
/// Only the parent directory name is looked at; anything not starting
/// with `values-`, or a bare `values-`, is ignored.
pub fn codes_from_paths<I, P>(paths: I) -> LocaleSet
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .filter_map(|path| {
            let dir = path.as_ref().parent()?.file_name()?.to_str()?;
            let code = dir.strip_prefix(VALUES_PREFIX)?;
            (!code.is_empty()).then(|| LocaleCode::new(code))
        })
        .collect()
}

/// Walk `root/resource_dir` for translated `strings.xml` files.
pub fn discover(root: &Path, resource_dir: &Path) -> Result<LocaleSet> {
    let res_dir = root.join(resource_dir);
    if !res_dir.is_dir() {
        warn!(path = %res_dir.display(), "resource directory not found, no locales discovered");
        return Ok(LocaleSet::new());
    }

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(&res_dir)
        .follow_links(true)
        .min_depth(2)
        .max_depth(2)
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(res_dir.as_path()).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop"));
            SyncError::io(&path, source)
        })?;

        if entry.file_type().is_file() && entry.file_name() == STRINGS_FILE {
            debug!(path = %entry.path().display(), "found translated resources");
            matches.push(entry.into_path());
        }
    }

    let locales = codes_from_paths(&matches);
    if locales.is_empty() {
        warn!(path = %res_dir.display(), "no values-* directories with {}", STRINGS_FILE);
    }
    Ok(locales)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(set: &LocaleSet) -> Vec<&str> {
        set.iter().map(LocaleCode::as_str).collect()
    }

    #[test]
    fn test_codes_from_paths_strips_prefix() {
        let set = codes_from_paths([
            "core/common/src/main/res/values-de/strings.xml",
            "core/common/src/main/res/values-pt-rBR/strings.xml",
        ]);
        assert_eq!(codes(&set), vec!["de", "pt-rBR"]);
    }

    #[test]
    fn test_codes_from_paths_uses_trailing_directory_only() {
        let set = codes_from_paths(["values-xx/res/values-fr/strings.xml"]);
        assert_eq!(codes(&set), vec!["fr"]);
    }

    #[test]
    fn test_codes_from_paths_ignores_non_matching() {
        let set = codes_from_paths([
            "res/values/strings.xml",
            "res/values-/strings.xml",
            "res/drawable-hdpi/strings.xml",
            "strings.xml",
        ]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_codes_from_paths_deduplicates() {
        let set = codes_from_paths(["a/values-es/strings.xml", "b/values-es/strings.xml"]);
        assert_eq!(codes(&set), vec!["es"]);
    }
}
