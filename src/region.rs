// SPDX-License-Identifier: PMPL-1.0-or-later

//! Marker region updater
//!
//! Replaces everything strictly between a start marker and an end marker
//! with freshly rendered lines. Text outside the markers is left
//! byte-for-byte untouched, so the surrounding file stays hand-maintained.
//!
//! The indent for the new lines is the longest leading run of spaces and
//! tabs found on any line of the old region. An empty or unindented region
//! yields no indent at all. This is a heuristic, not an indentation
//! parser: a region holding one deeply nested line will push that depth
//! onto every rendered line.

use crate::error::{Result, SyncError};
use crate::types::MarkerPair;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// The document does not contain a usable marker pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDocument {
    #[error("marker strings must not be empty")]
    EmptyMarker,

    #[error("start marker `{marker}` not found")]
    MissingStart { marker: String },

    #[error("end marker `{marker}` not found after start marker")]
    MissingEnd { marker: String },

    #[error("end marker `{end}` appears before start marker `{start}`")]
    EndBeforeStart { start: String, end: String },
}

/// Longest leading run of spaces/tabs over all lines of `region`.
pub fn detect_indent(region: &str) -> &str {
    let mut indent = "";
    for line in region.split('\n') {
        let width = line
            .bytes()
            .take_while(|b| *b == b' ' || *b == b'\t')
            .count();
        if width > indent.len() {
            indent = &line[..width];
        }
    }
    indent
}

/// Splice `lines` between the markers of `document`.
///
/// Each line gets the detected indent and the lines are joined with
/// `separator`. The result is
/// `before + start + "\n" + body + "\n" + indent + end + after`.
pub fn update_region<S: AsRef<str>>(
    document: &str,
    markers: &MarkerPair,
    separator: &str,
    lines: &[S],
) -> Result<String, MalformedDocument> {
    let (start, end) = (markers.start.as_str(), markers.end.as_str());
    if start.is_empty() || end.is_empty() {
        return Err(MalformedDocument::EmptyMarker);
    }

    let (before, rest) = document
        .split_once(start)
        .ok_or_else(|| MalformedDocument::MissingStart {
            marker: start.to_string(),
        })?;

    if before.contains(end) {
        return Err(MalformedDocument::EndBeforeStart {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let (old_region, after) = rest
        .split_once(end)
        .ok_or_else(|| MalformedDocument::MissingEnd {
            marker: end.to_string(),
        })?;

    let indent = detect_indent(old_region);
    debug!(indent = indent.len(), lines = lines.len(), "rendering region");

    let body = lines
        .iter()
        .map(|line| format!("{}{}", indent, line.as_ref()))
        .collect::<Vec<_>>()
        .join(separator);

    let mut out = String::with_capacity(document.len() + body.len());
    out.push_str(before);
    out.push_str(start);
    out.push('\n');
    out.push_str(&body);
    out.push('\n');
    out.push_str(indent);
    out.push_str(end);
    out.push_str(after);
    Ok(out)
}

/// Result of rewriting one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileUpdate {
    pub changed: bool,
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SyncError::io(path, e))
}

fn splice_file<S: AsRef<str>>(
    path: &Path,
    markers: &MarkerPair,
    separator: &str,
    lines: &[S],
) -> Result<(String, String)> {
    let original = read_document(path)?;
    let updated = update_region(&original, markers, separator, lines)
        .map_err(|e| SyncError::malformed(path, e))?;
    Ok((original, updated))
}

/// Read `path`, splice the region and overwrite the file in full.
///
/// The splice happens before anything is written, so a malformed file is
/// left as it was.
pub fn update_file<S: AsRef<str>>(
    path: &Path,
    markers: &MarkerPair,
    separator: &str,
    lines: &[S],
) -> Result<FileUpdate> {
    let (original, updated) = splice_file(path, markers, separator, lines)?;
    fs::write(path, &updated).map_err(|e| SyncError::io(path, e))?;
    Ok(FileUpdate {
        changed: original != updated,
    })
}

/// Like [`update_file`] but never writes. Returns `true` when the file
/// already holds exactly the rendered region.
pub fn check_file<S: AsRef<str>>(
    path: &Path,
    markers: &MarkerPair,
    separator: &str,
    lines: &[S],
) -> Result<bool> {
    let (original, updated) = splice_file(path, markers, separator, lines)?;
    Ok(original == updated)
}
