//! Configuration System
//!
//! Layered configuration for the scanner binary: merge-policy defaults, then
//! the per-user config file, then an explicit `--config` file. Command-line
//! flags are applied on top by the CLI.

use crate::error::ScanError;
use crate::exclude::ExclusionRules;
use crate::logging::LoggingConfig;
use crate::scan::digest::DigestAlgorithm;
use crate::scan::ScanOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

pub use sources::user_file::user_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FingerprintConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan settings as written in config files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Textual exclusion rules; `None` keeps the built-in defaults
    #[serde(default)]
    pub excludes: Option<Vec<String>>,

    /// Emit excluded-path markers
    #[serde(default)]
    pub verbose: bool,

    /// Digest algorithm
    #[serde(default)]
    pub algorithm: DigestAlgorithm,
}

impl ScanConfig {
    /// Compile into scanner options. Malformed rules fail here, before any I/O.
    pub fn to_options(&self) -> Result<ScanOptions, ScanError> {
        let excludes = match &self.excludes {
            Some(rules) => ExclusionRules::parse(rules)?,
            None => ExclusionRules::defaults(),
        };
        Ok(ScanOptions {
            excludes,
            verbose: self.verbose,
            algorithm: self.algorithm,
        })
    }
}

impl FingerprintConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ScanError> {
        self.scan.to_options()?;
        self.logging.validate()
    }
}

/// Loads [`FingerprintConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the user file if present, and `explicit` if given.
    pub fn load(explicit: Option<&Path>) -> Result<FingerprintConfig, ScanError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::user_file::add_to_builder(builder);
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path);
        }
        let config: FingerprintConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load defaults and a single file, ignoring the user file.
    pub fn load_from_file(path: &Path) -> Result<FingerprintConfig, ScanError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::explicit_file::add_to_builder(builder, path);
        let config: FingerprintConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
