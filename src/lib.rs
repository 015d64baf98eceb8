//! Fingerprint: checksum manifests for directory trees
//!
//! Walks one or more roots in a fixed order, digests every included file and
//! writes a line-oriented manifest that can be diffed against a later run to
//! spot changed, added or removed files.

pub mod cli;
pub mod config;
pub mod error;
pub mod exclude;
pub mod logging;
pub mod scan;

pub use error::ScanError;
pub use exclude::{ExclusionRules, PathPredicate};
pub use scan::digest::DigestAlgorithm;
pub use scan::{scan_paths, scan_paths_to, ScanCounters, ScanOptions, Scanner};
