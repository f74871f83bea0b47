// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types shared by the updater and the run orchestration

use crate::region::MalformedDocument;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{}: invalid marker region: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedDocument,
    },

    #[error("{}: file not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: failed to serialize report: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SyncError {
    /// Classify an I/O failure on `path`, splitting out missing files.
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            SyncError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SyncError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn malformed(path: &Path, source: MalformedDocument) -> Self {
        SyncError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T, E = SyncError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_classified_as_not_found() {
        let err = SyncError::io(
            Path::new("app/build.gradle.kts"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, SyncError::NotFound { .. }));
        assert_eq!(err.to_string(), "app/build.gradle.kts: file not found");
    }

    #[test]
    fn test_malformed_message_names_file_and_marker() {
        let err = SyncError::malformed(
            Path::new("locales_config.xml"),
            MalformedDocument::MissingEnd {
                marker: "<!--locale list end-->".into(),
            },
        );
        let message = err.to_string();
        assert!(message.contains("locales_config.xml"));
        assert!(message.contains("<!--locale list end-->"));
    }
}
