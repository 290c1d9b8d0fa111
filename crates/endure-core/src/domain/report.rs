use std::path::{Path, PathBuf};

/// What a copy or scaffold run wrote to disk.
///
/// Paths are destination paths, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    /// Template files that were deliberately not copied (by template path).
    pub skipped: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}
