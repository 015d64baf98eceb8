//! Error types for the Fingerprint checksum scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Scan-related errors
///
/// Every failure is treated as non-transient: nothing is retried and a scan
/// that hits any of these stops immediately.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid exclusion pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No roots given to scan")]
    NoRoots,

    #[error("Scanner already ran; build a new scanner for each scan")]
    AlreadyScanned,

    #[error("Cannot scan root {root:?}: {source}")]
    RootAccess {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest: {0}")]
    Write(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ScanError {
    fn from(err: config::ConfigError) -> Self {
        ScanError::ConfigError(err.to_string())
    }
}

impl ScanError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn root_access(root: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::RootAccess {
            root: root.into(),
            source,
        }
    }
}
