//! CLI parse: clap types for Fingerprint. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fingerprint CLI - checksum manifests for directory trees
#[derive(Parser, Debug)]
#[command(name = "fingerprint")]
#[command(version)]
#[command(about = "Write a checksum manifest describing one or more directory trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the user config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan roots and write a manifest
    Scan {
        /// Directories to scan, in order
        #[arg(required = true)]
        roots: Vec<PathBuf>,

        /// Emit a marker line for every excluded path
        #[arg(short, long)]
        verbose: bool,

        /// Exclusion rule (glob:, suffix:, regex: or bare regex); replaces the defaults
        #[arg(long = "exclude", value_name = "RULE")]
        excludes: Vec<String>,

        /// Drop the built-in dotfile and backup rules
        #[arg(long)]
        no_default_excludes: bool,

        /// Digest algorithm (md5, blake3)
        #[arg(long)]
        algorithm: Option<String>,

        /// Write the manifest to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
