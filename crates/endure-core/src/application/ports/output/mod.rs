//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `endure-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::EndureResult;

/// Kind of a directory entry, as seen without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices. Walks skip these.
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Final path component, lossily converted to UTF-8.
    pub name: String,
    /// Full path of the entry.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `endure_adapters::filesystem::LocalFilesystem` (production)
/// - `endure_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Missing paths must surface as `ApplicationError::NotFound` so callers can
/// tell an absent root from a permission problem.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// List the immediate children of `path`, sorted by name.
    fn read_dir(&self, path: &Path) -> EndureResult<Vec<DirEntry>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EndureResult<()>;

    /// Copy a file's bytes to `to`, replacing any existing file.
    fn copy_file(&self, from: &Path, to: &Path) -> EndureResult<()>;

    /// Read a file's raw bytes.
    fn read(&self, path: &Path) -> EndureResult<Vec<u8>>;

    /// Write bytes to a file, replacing any existing content.
    fn write(&self, path: &Path, content: &[u8]) -> EndureResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// `true` if `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for locating event-emission calls in source text.
///
/// Implemented by:
/// - `endure_adapters::matcher::RegexEventMatcher`
#[cfg_attr(test, mockall::automock)]
pub trait EventMatcher: Send + Sync {
    /// Every non-overlapping match in `content`, in order of appearance.
    fn find_events(&self, content: &str) -> Vec<String>;
}
