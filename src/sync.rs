// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sync: discover locales once, then rewrite every target's region
//!
//! Targets are processed in order. The first failure aborts the run;
//! targets already written stay written.

use crate::discovery::{self, DEFAULT_RESOURCE_DIR};
use crate::error::{Result, SyncError};
use crate::region;
use crate::target::Target;
use crate::types::{LocaleSet, SyncReport, TargetOutcome, TargetStatus};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for a sync run
pub struct SyncConfig {
    /// Project root; target paths are already joined onto it
    pub root: PathBuf,
    /// Resource directory, relative to `root`
    pub resource_dir: PathBuf,
    pub targets: Vec<Target>,
    /// Compare only, never write
    pub check: bool,
}

impl SyncConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            targets: Target::defaults(&root),
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            root,
            check: false,
        }
    }
}

fn sync_target(target: &Target, locales: &LocaleSet, check: bool) -> Result<TargetStatus> {
    let lines = target.render(locales);

    if check {
        let fresh = region::check_file(&target.path, &target.markers, &target.separator, &lines)?;
        return Ok(if fresh {
            TargetStatus::Unchanged
        } else {
            TargetStatus::Stale
        });
    }

    let update = region::update_file(&target.path, &target.markers, &target.separator, &lines)?;
    if update.changed {
        info!(name = %target.name, locales = locales.len(), "updated locale list");
        Ok(TargetStatus::Updated)
    } else {
        info!(name = %target.name, "locale list already up to date");
        Ok(TargetStatus::Unchanged)
    }
}

/// Run discovery and update (or check) every configured target
pub fn run(config: &SyncConfig) -> Result<SyncReport> {
    let locales = discovery::discover(&config.root, &config.resource_dir)?;
    info!(count = locales.len(), "discovered locales");

    let mut targets = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let status = sync_target(target, &locales, config.check)?;
        targets.push(TargetOutcome {
            name: target.name.clone(),
            path: target.path.clone(),
            status,
        });
    }

    Ok(SyncReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        root: config.root.clone(),
        check: config.check,
        locales: locales.into_iter().collect(),
        targets,
    })
}

/// Print a summary table to the terminal
pub fn print_summary(report: &SyncReport, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n{}", "=== LOCALE SYNC ===".bold());
    println!(
        "Root: {}  |  Locales: {}",
        report.root.display(),
        report.locales.len()
    );
    if !report.locales.is_empty() {
        let codes: Vec<&str> = report.locales.iter().map(|c| c.as_str()).collect();
        println!("  {}", codes.join(" "));
    }
    println!();

    for outcome in &report.targets {
        let status = match outcome.status {
            TargetStatus::Updated => "updated".green(),
            TargetStatus::Unchanged => "unchanged".normal(),
            TargetStatus::Stale => "stale".red().bold(),
        };
        println!("  {:<24} {:<10} {}", outcome.name, status, outcome.path.display());
    }
    println!();
}

/// Write the sync report as JSON
pub fn write_report(report: &SyncReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(report).map_err(|source| SyncError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| SyncError::io(path, e))?;
    Ok(())
}
