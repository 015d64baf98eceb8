//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs go to stderr by default
//! so stdout stays free for the manifest.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding `EnvFilter` directives; overrides the configured level.
pub const LOG_ENV: &str = "FINGERPRINT_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, stdout, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stderr,
    Stdout,
    File(PathBuf),
}

impl LoggingConfig {
    /// Check format, output and level without installing anything.
    pub fn validate(&self) -> Result<(), ScanError> {
        parse_format(&self.format)?;
        self.destination()?;
        if self.level != "off" {
            self.level
                .parse::<tracing::Level>()
                .map_err(|_| ScanError::ConfigError(format!("Invalid log level: {}", self.level)))?;
        }
        Ok(())
    }

    fn destination(&self) -> Result<Destination, ScanError> {
        match self.output.as_str() {
            "stderr" => Ok(Destination::Stderr),
            "stdout" => Ok(Destination::Stdout),
            "file" => self.file.clone().map(Destination::File).ok_or_else(|| {
                ScanError::ConfigError("Log output 'file' requires logging.file".to_string())
            }),
            other => Err(ScanError::ConfigError(format!(
                "Invalid log output: {} (must be 'stderr', 'stdout', or 'file')",
                other
            ))),
        }
    }
}

fn parse_format(format: &str) -> Result<bool, ScanError> {
    match format {
        "json" => Ok(true),
        "text" => Ok(false),
        other => Err(ScanError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

/// Build the level filter: `FINGERPRINT_LOG` wins over the configured level.
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    EnvFilter::new(&config.level)
}

fn open_log_file(path: &Path) -> Result<std::fs::File, ScanError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScanError::ConfigError(format!("Failed to create log directory: {}", e))
            })?;
        }
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ScanError::ConfigError(format!("Failed to open log file {:?}: {}", path, e)))
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ScanError> {
    config.validate()?;
    let json = parse_format(&config.format)?;
    let destination = config.destination()?;
    let base_subscriber = Registry::default().with(build_env_filter(config));

    let result = match (json, destination) {
        (true, Destination::File(path)) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(open_log_file(&path)?),
            )
            .try_init(),
        (true, Destination::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        (true, Destination::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (false, Destination::File(path)) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(open_log_file(&path)?),
            )
            .try_init(),
        (false, Destination::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        (false, Destination::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ScanError::ConfigError(format!("Failed to initialize logging: {}", e)))
}
