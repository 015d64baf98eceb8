//! Streaming content digests for manifest file lines.

use crate::error::ScanError;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

/// Bytes read per chunk while digesting.
pub const DIGEST_CHUNK_SIZE: usize = 1024 * 1024;

/// Checksum algorithm used for file lines.
///
/// Manifests produced with different algorithms are not comparable, so any
/// non-default algorithm is named in the manifest header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Blake3,
}

impl DigestAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Blake3 => "blake3",
        }
    }

    /// Number of hex digits in a digest.
    pub fn hex_width(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 32,
            DigestAlgorithm::Blake3 => 64,
        }
    }

    pub fn is_default(self) -> bool {
        self == DigestAlgorithm::default()
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            other => Err(format!(
                "Invalid digest algorithm: {} (must be 'md5' or 'blake3')",
                other
            )),
        }
    }
}

enum Hasher {
    Md5(Md5),
    Blake3(Box<blake3::Hasher>),
}

impl Hasher {
    fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Md5 => Hasher::Md5(Md5::new()),
            DigestAlgorithm::Blake3 => Hasher::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, bytes: &[u8]) {
        match self {
            Hasher::Md5(h) => h.update(bytes),
            Hasher::Blake3(h) => {
                h.update(bytes);
            }
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Hasher::Md5(h) => hex::encode(h.finalize()),
            Hasher::Blake3(h) => hex::encode(h.finalize().as_bytes()),
        }
    }
}

/// Digest everything `reader` yields, in bounded chunks.
pub fn digest_reader<R: Read>(mut reader: R, algorithm: DigestAlgorithm) -> std::io::Result<String> {
    let mut hasher = Hasher::new(algorithm);
    let mut buf = vec![0u8; DIGEST_CHUNK_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(hasher.finalize_hex())
}

/// Digest the file at `path`.
///
/// The handle lives only for the duration of this call. Any open or read
/// failure is reported; a partial digest is never returned.
pub fn digest_file(path: &Path, algorithm: DigestAlgorithm) -> Result<String, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::read(path, e))?;
    digest_reader(file, algorithm).map_err(|e| ScanError::read(path, e))
}

/// Digest an in-memory byte slice.
pub fn digest_bytes(bytes: &[u8], algorithm: DigestAlgorithm) -> String {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(bytes);
    hasher.finalize_hex()
}
