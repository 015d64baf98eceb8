//! CLI route: run context and command dispatch.

use crate::cli::output::open_sink;
use crate::cli::parse::{Cli, Commands};
use crate::config::{ConfigLoader, FingerprintConfig, ScanConfig};
use crate::error::ScanError;
use crate::exclude::ExclusionRules;
use crate::logging::LoggingConfig;
use crate::scan::{scan_paths_to, ScanCounters, ScanOptions};
use std::path::Path;
use tracing::info;

/// Runtime context for CLI execution: the loaded configuration.
#[derive(Debug, Clone)]
pub struct RunContext {
    config: FingerprintConfig,
}

impl RunContext {
    /// Load configuration, layering `config_path` over the user file.
    pub fn new(config_path: Option<&Path>) -> Result<Self, ScanError> {
        Ok(Self {
            config: ConfigLoader::load(config_path)?,
        })
    }

    pub fn from_config(config: FingerprintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// Logging configuration with CLI flags applied over the config file.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if let Some(ref level) = cli.log_level {
            logging.level = level.clone();
        }
        if let Some(ref format) = cli.log_format {
            logging.format = format.clone();
        }
        if let Some(ref output) = cli.log_output {
            logging.output = output.clone();
        }
        if let Some(ref file) = cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Run a command to completion.
    pub fn execute(&self, command: &Commands) -> Result<ScanCounters, ScanError> {
        match command {
            Commands::Scan {
                roots,
                verbose,
                excludes,
                no_default_excludes,
                algorithm,
                output,
            } => {
                let options = scan_options(
                    &self.config.scan,
                    *verbose,
                    excludes,
                    *no_default_excludes,
                    algorithm.as_deref(),
                )?;
                let sink = open_sink(output.as_deref())?;
                info!(roots = roots.len(), "Starting scan");
                let scanner = scan_paths_to(roots.iter(), options, sink)?;
                Ok(scanner.counters())
            }
        }
    }
}

/// Merge scan flags over the configured scan settings.
///
/// `--exclude` replaces the configured rules; `--no-default-excludes` alone
/// scans everything.
fn scan_options(
    config: &ScanConfig,
    verbose: bool,
    excludes: &[String],
    no_default_excludes: bool,
    algorithm: Option<&str>,
) -> Result<ScanOptions, ScanError> {
    let mut options = config.to_options()?;
    options.verbose |= verbose;

    if !excludes.is_empty() {
        options.excludes = ExclusionRules::parse(excludes)?;
    } else if no_default_excludes {
        options.excludes = ExclusionRules::none();
    }

    if let Some(name) = algorithm {
        options.algorithm = name.parse().map_err(ScanError::ConfigError)?;
    }

    Ok(options)
}
