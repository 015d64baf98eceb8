//! Manifest emission.
//!
//! Line format for the default (MD5) configuration:
//!
//! ```text
//! # Checksum generated by Fingerprint (1.1.0) at 2026-10-18 09:30:00 +0000
//! # Root: /srv/data
//!
//!                                   ./
//! 49f68a5c8493ec2c0bf489821c21fc3b: ./a.txt
//! #                               : ./.hidden
//! # Directories: 1 Files: 1 Excluded: 1
//! ```
//!
//! Directory lines are indented by the digest width plus two spaces so paths
//! line up with file lines. Excluded lines only appear in verbose mode. A
//! non-default algorithm adds `# Algorithm: <name>` after the root line; the
//! column width then follows that algorithm's digest width.
//!
//! Root and entry paths are written in the escaped form from
//! [`escape_os_str`]: names that are not valid UTF-8 keep their raw bytes as
//! `\xNN`, so two different files never share a manifest line.

use super::digest::DigestAlgorithm;
use super::path_text::escape_os_str;
use super::ScanCounters;
use crate::error::ScanError;
use chrono::Local;
use std::io::Write;
use std::path::Path;

/// Name written in every header line.
pub const TOOL_NAME: &str = "Fingerprint";

/// Crate version written in every header line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header timestamp format (local time with numeric offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One manifest record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEntry<'a> {
    Header { root: &'a Path, timestamp: &'a str },
    DirectoryMarker { path: &'a str },
    FileDigest { digest: &'a str, path: &'a str },
    ExcludedMarker { path: &'a str },
    Summary(ScanCounters),
}

/// Writes manifest entries, in order, to an injected sink.
#[derive(Debug)]
pub struct ManifestWriter<W: Write> {
    sink: W,
    algorithm: DigestAlgorithm,
}

impl<W: Write> ManifestWriter<W> {
    pub fn new(sink: W, algorithm: DigestAlgorithm) -> Self {
        Self { sink, algorithm }
    }

    pub fn write(&mut self, entry: &ManifestEntry<'_>) -> Result<(), ScanError> {
        self.render(entry).map_err(ScanError::Write)
    }

    pub fn flush(&mut self) -> Result<(), ScanError> {
        self.sink.flush().map_err(ScanError::Write)
    }

    fn render(&mut self, entry: &ManifestEntry<'_>) -> std::io::Result<()> {
        let width = self.algorithm.hex_width();
        match entry {
            ManifestEntry::Header { root, timestamp } => {
                writeln!(
                    self.sink,
                    "# Checksum generated by {} ({}) at {}",
                    TOOL_NAME, VERSION, timestamp
                )?;
                writeln!(self.sink, "# Root: {}", escape_os_str(root.as_os_str()))?;
                if !self.algorithm.is_default() {
                    writeln!(self.sink, "# Algorithm: {}", self.algorithm)?;
                }
            }
            ManifestEntry::DirectoryMarker { path } => {
                writeln!(self.sink)?;
                writeln!(self.sink, "{:width$}  {}", "", path, width = width)?;
            }
            ManifestEntry::FileDigest { digest, path } => {
                writeln!(self.sink, "{}: {}", digest, path)?;
            }
            ManifestEntry::ExcludedMarker { path } => {
                writeln!(self.sink, "{:<width$}: {}", "#", path, width = width)?;
            }
            ManifestEntry::Summary(counters) => {
                writeln!(
                    self.sink,
                    "# Directories: {} Files: {} Excluded: {}",
                    counters.directories, counters.files, counters.excluded
                )?;
            }
        }
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
