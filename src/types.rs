// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for locale-sync

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// A language/region identifier taken from a `values-<code>` directory,
/// e.g. `de`, `pt-rBR` or `zh-rTW`. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Sorted, de-duplicated set of discovered locales
pub type LocaleSet = BTreeSet<LocaleCode>;

/// Literal start/end strings bounding a generated region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: String,
    pub end: String,
}

impl MarkerPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// What happened to a single target during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    /// File rewritten with different content
    Updated,
    /// File already matched the rendered region
    Unchanged,
    /// Check mode: file differs from what would be written
    Stale,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetOutcome {
    pub name: String,
    pub path: PathBuf,
    pub status: TargetStatus,
}

/// Summary of one run across all targets
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub created_at: String,
    pub root: PathBuf,
    pub check: bool,
    pub locales: Vec<LocaleCode>,
    pub targets: Vec<TargetOutcome>,
}

impl SyncReport {
    pub fn is_stale(&self) -> bool {
        self.targets
            .iter()
            .any(|t| matches!(t.status, TargetStatus::Stale))
    }

    pub fn stale_targets(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.targets
            .iter()
            .filter(|t| matches!(t.status, TargetStatus::Stale))
    }
}
