// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-sync: keep generated locale lists in step with translations
//!
//! Scans the translated resource directories of a project and rewrites the
//! marker-delimited locale lists in the app build script and the locale
//! manifest. Run with no arguments from the project root.

use anyhow::{Context, Result};
use clap::Parser;
use locale_sync::sync::{self, SyncConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locale-sync")]
#[command(version)]
#[command(about = "Synchronize translated locale codes into build and manifest files")]
#[command(long_about = None)]
struct Cli {
    /// Project root
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Resource directory holding values-*/strings.xml, relative to root
    #[arg(long, value_name = "DIR")]
    resource_dir: Option<PathBuf>,

    /// Only check; exit non-zero if any file would change
    #[arg(long)]
    check: bool,

    /// Also write a JSON run report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Suppress the summary table
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = SyncConfig::new(cli.root);
    if let Some(resource_dir) = cli.resource_dir {
        config.resource_dir = resource_dir;
    }
    config.check = cli.check;

    let report = sync::run(&config).context("locale sync failed")?;
    sync::print_summary(&report, cli.quiet);

    if let Some(path) = cli.report {
        sync::write_report(&report, &path)?;
        println!("Report saved to: {}", path.display());
    }

    if report.is_stale() {
        for outcome in report.stale_targets() {
            eprintln!("stale: {}", outcome.path.display());
        }
        anyhow::bail!("locale lists are out of date; run locale-sync to regenerate");
    }

    Ok(())
}
