//! Checksum scanner
//!
//! Walks each root in order, classifies every visited path against the
//! exclusion rules, digests included files and writes a manifest to the
//! configured sink. Counters accumulate across all roots and are written once
//! as the final summary line.

pub mod digest;
pub mod manifest;
pub mod path_text;
pub mod traversal;

use self::digest::{digest_file, DigestAlgorithm};
use self::manifest::{timestamp_now, ManifestEntry, ManifestWriter};
use self::traversal::{EntryKind, Traversal};
use crate::error::ScanError;
use crate::exclude::ExclusionRules;
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Scanner options
#[derive(Debug)]
pub struct ScanOptions {
    /// Exclusion rules (default: dotfiles and `~` backups)
    pub excludes: ExclusionRules,
    /// Emit a marker line for every excluded path
    pub verbose: bool,
    /// Checksum algorithm for file lines
    pub algorithm: DigestAlgorithm,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excludes: ExclusionRules::defaults(),
            verbose: false,
            algorithm: DigestAlgorithm::default(),
        }
    }
}

/// Totals across every root of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub directories: u64,
    pub files: u64,
    pub excluded: u64,
}

/// Scans a fixed list of roots into a manifest.
///
/// A scanner runs once; build a new one for every scan.
#[derive(Debug)]
pub struct Scanner<W: Write = Vec<u8>> {
    roots: Vec<PathBuf>,
    options: ScanOptions,
    manifest: ManifestWriter<W>,
    counters: ScanCounters,
    scanned: bool,
}

impl Scanner<Vec<u8>> {
    /// Scanner writing into an in-memory buffer.
    pub fn new<I, P>(roots: I, options: ScanOptions) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_output(roots, options, Vec::new())
    }

    /// The buffered manifest as text.
    pub fn output_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.manifest.get_ref())
    }
}

impl<W: Write> Scanner<W> {
    /// Scanner writing to `output`.
    pub fn with_output<I, P>(roots: I, options: ScanOptions, output: W) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots: Vec<PathBuf> = roots.into_iter().map(Into::into).collect();
        if roots.is_empty() {
            return Err(ScanError::NoRoots);
        }

        let manifest = ManifestWriter::new(output, options.algorithm);
        Ok(Self {
            roots,
            options,
            manifest,
            counters: ScanCounters::default(),
            scanned: false,
        })
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn counters(&self) -> ScanCounters {
        self.counters
    }

    pub fn output(&self) -> &W {
        self.manifest.get_ref()
    }

    pub fn into_output(self) -> W {
        self.manifest.into_inner()
    }

    /// True if `path` (relative to a root) matches any exclusion rule.
    pub fn excluded(&self, path: &str) -> bool {
        self.options.excludes.excluded(path)
    }

    /// Scan every root in order and write the manifest.
    ///
    /// Any error aborts the whole scan; nothing is written for later roots and
    /// no summary line is emitted. A second call fails with
    /// [`ScanError::AlreadyScanned`].
    pub fn scan(&mut self) -> Result<ScanCounters, ScanError> {
        if self.scanned {
            return Err(ScanError::AlreadyScanned);
        }
        self.scanned = true;

        for root in &self.roots {
            scan_root(root, &self.options, &mut self.manifest, &mut self.counters)?;
        }

        self.manifest.write(&ManifestEntry::Summary(self.counters))?;
        self.manifest.flush()?;

        info!(
            roots = self.roots.len(),
            directories = self.counters.directories,
            files = self.counters.files,
            excluded = self.counters.excluded,
            "Scan complete"
        );
        Ok(self.counters)
    }
}

fn scan_root<W: Write>(
    root: &Path,
    options: &ScanOptions,
    manifest: &mut ManifestWriter<W>,
    counters: &mut ScanCounters,
) -> Result<(), ScanError> {
    info!(root = %root.display(), "Scanning root");
    let traversal = Traversal::new(root, &options.excludes)?;

    let timestamp = timestamp_now();
    manifest.write(&ManifestEntry::Header {
        root,
        timestamp: &timestamp,
    })?;

    for visit in traversal {
        let visit = visit?;

        if visit.excluded {
            counters.excluded += 1;
            if visit.is_dir() {
                debug!(path = %visit.relative, "Pruned excluded directory");
            } else {
                debug!(path = %visit.relative, "Excluded file");
            }
            if options.verbose {
                manifest.write(&ManifestEntry::ExcludedMarker {
                    path: &visit.relative,
                })?;
            }
            continue;
        }

        match visit.kind {
            EntryKind::Directory => {
                counters.directories += 1;
                manifest.write(&ManifestEntry::DirectoryMarker {
                    path: &visit.relative,
                })?;
            }
            EntryKind::File => {
                counters.files += 1;
                let digest = digest_file(&visit.path, options.algorithm)?;
                trace!(path = %visit.relative, digest = %digest, "Digested file");
                manifest.write(&ManifestEntry::FileDigest {
                    digest: &digest,
                    path: &visit.relative,
                })?;
            }
        }
    }

    Ok(())
}

/// Build a buffered scanner for `roots`, run it and hand it back.
pub fn scan_paths<I, P>(roots: I, options: ScanOptions) -> Result<Scanner, ScanError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut scanner = Scanner::new(roots, options)?;
    scanner.scan()?;
    Ok(scanner)
}

/// Like [`scan_paths`], writing to `output`.
pub fn scan_paths_to<I, P, W>(
    roots: I,
    options: ScanOptions,
    output: W,
) -> Result<Scanner<W>, ScanError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
    W: Write,
{
    let mut scanner = Scanner::with_output(roots, options, output)?;
    scanner.scan()?;
    Ok(scanner)
}
