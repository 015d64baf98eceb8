//! Pre-order directory traversal with pruning.
//!
//! Walks one root using an explicit stack of pending paths. Each visited
//! path is classified against the exclusion rules exactly once; an excluded
//! directory is yielded but never listed, so nothing beneath it is visited.

use super::path_text::escape_os_str;
use crate::error::ScanError;
use crate::exclude::ExclusionRules;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative path of the root itself.
pub const ROOT_RELATIVE: &str = "./";

/// Kind of a visited filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One visited path and its exclusion verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Path relative to the root, `./`-prefixed with `/` separators, names
    /// escaped by [`escape_os_str`]
    pub relative: String,
    /// Path on disk
    pub path: PathBuf,
    pub kind: EntryKind,
    pub excluded: bool,
}

impl Visit {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[derive(Debug)]
struct Pending {
    path: PathBuf,
    relative: String,
}

/// Lazy, single-pass traversal of one root.
///
/// Children are visited in ascending file-name order. A directory's listing
/// is read on the call after the directory was yielded, so the directory is
/// always seen before any of its descendants. The first error ends iteration.
#[derive(Debug)]
pub struct Traversal<'a> {
    rules: &'a ExclusionRules,
    pending: Vec<Pending>,
    expand: Option<Pending>,
    failed: bool,
}

impl<'a> Traversal<'a> {
    /// Start a traversal of `root`.
    ///
    /// Fails with [`ScanError::RootAccess`] if the root is missing, is not a
    /// directory, or cannot be listed.
    pub fn new(root: &Path, rules: &'a ExclusionRules) -> Result<Self, ScanError> {
        let metadata = fs::metadata(root).map_err(|e| ScanError::root_access(root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::root_access(
                root,
                std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
            ));
        }
        fs::read_dir(root).map_err(|e| ScanError::root_access(root, e))?;

        Ok(Self {
            rules,
            pending: vec![Pending {
                path: root.to_path_buf(),
                relative: ROOT_RELATIVE.to_string(),
            }],
            expand: None,
            failed: false,
        })
    }

    fn push_children(&mut self, dir: &Pending) -> Result<(), ScanError> {
        let mut children = Vec::new();
        for entry in fs::read_dir(&dir.path).map_err(|e| ScanError::read(&dir.path, e))? {
            let entry = entry.map_err(|e| ScanError::read(&dir.path, e))?;
            children.push(entry.file_name());
        }
        children.sort();

        // Reverse so the smallest name is popped first.
        for name in children.into_iter().rev() {
            let name_str = escape_os_str(&name);
            let relative = if dir.relative == ROOT_RELATIVE {
                format!("{}{}", ROOT_RELATIVE, name_str)
            } else {
                format!("{}/{}", dir.relative, name_str)
            };
            self.pending.push(Pending {
                path: dir.path.join(&name),
                relative,
            });
        }
        Ok(())
    }
}

impl Iterator for Traversal<'_> {
    type Item = Result<Visit, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if let Some(dir) = self.expand.take() {
            if let Err(e) = self.push_children(&dir) {
                self.failed = true;
                self.pending.clear();
                return Some(Err(e));
            }
        }

        let Pending { path, relative } = self.pending.pop()?;
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let excluded = self.rules.excluded(&relative);

        if kind == EntryKind::Directory && !excluded {
            self.expand = Some(Pending {
                path: path.clone(),
                relative: relative.clone(),
            });
        }

        Some(Ok(Visit {
            relative,
            path,
            kind,
            excluded,
        }))
    }
}
