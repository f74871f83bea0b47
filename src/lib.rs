// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-sync: generated locale lists for hand-maintained project files.
//!
//! The crate splits into two parts:
//! 1. **Discovery** finds `values-<code>/strings.xml` resource
//!    directories and collects the locale codes.
//! 2. **Region**: a marker-delimited splice that rewrites only the text
//!    between a start and an end marker, keeping the old indent.
//!
//! `target` describes the files to update and `sync` ties both parts
//! together for a run.

pub mod discovery;
pub mod error;
pub mod region;
pub mod sync;
pub mod target;
pub mod types;

pub use error::SyncError;
pub use region::{update_region, MalformedDocument};
pub use types::{LocaleCode, LocaleSet, MarkerPair};
