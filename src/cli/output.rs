//! CLI output: error mapping and the manifest sink.

use crate::error::ScanError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ScanError) -> String {
    match e {
        ScanError::RootAccess { .. } => format!("{} (no manifest summary was written)", e),
        _ => e.to_string(),
    }
}

/// Open the manifest sink: the given file (truncated) or stdout.
pub fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>, ScanError> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(ScanError::Write)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}
