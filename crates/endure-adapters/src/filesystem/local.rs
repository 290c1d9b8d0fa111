//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use endure_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::{EndureError, EndureResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_dir(&self, path: &Path) -> EndureResult<Vec<DirEntry>> {
        let metadata =
            std::fs::metadata(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        if !metadata.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into());
        }

        let mut entries = Vec::new();
        for walk_entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let walk_entry = walk_entry.map_err(|e| map_walk_error(path, e))?;
            let file_type = walk_entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(DirEntry::new(
                walk_entry.file_name().to_string_lossy(),
                walk_entry.path(),
                kind,
            ));
        }

        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> EndureResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> EndureResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, &format!("copy to {}", to.display())))
    }

    fn read(&self, path: &Path) -> EndureResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, content: &[u8]) -> EndureResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> EndureError {
    if e.kind() == io::ErrorKind::NotFound {
        return ApplicationError::NotFound {
            path: path.to_path_buf(),
        }
        .into();
    }

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> EndureError {
    let path = e.path().unwrap_or(root).to_path_buf();
    let error = match e.io_error() {
        Some(io) if io.kind() == io::ErrorKind::NotFound => ApplicationError::NotFound { path },
        _ => ApplicationError::FilesystemError {
            path,
            reason: format!("Failed to list directory: {e}"),
        },
    };
    error.into()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn read_dir_is_sorted_and_typed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("b-dir")).unwrap();
        fs::write(temp.path().join("c.js"), "x").unwrap();
        fs::write(temp.path().join("a.txt"), "x").unwrap();

        let entries = LocalFilesystem::new().read_dir(temp.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b-dir", "c.js"]);
        assert_eq!(entries[1].kind, EntryKind::Directory);
        assert_eq!(entries[2].kind, EntryKind::File);
        assert_eq!(entries[2].path, temp.path().join("c.js"));
    }

    #[test]
    fn read_dir_on_missing_path_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_dir(&temp.path().join("modules"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn read_dir_on_file_is_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.js");
        fs::write(&file, "x").unwrap();
        let err = LocalFilesystem::new().read_dir(&file).unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn copy_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.txt");
        let dst = temp.path().join("dst.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old content").unwrap();

        LocalFilesystem::new().copy_file(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_reported_as_other() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real.js"), "x").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.js"), temp.path().join("link.js"))
            .unwrap();

        let entries = LocalFilesystem::new().read_dir(temp.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link.js").unwrap();
        assert_eq!(link.kind, EntryKind::Other);
    }

    #[cfg(unix)]
    #[test]
    fn linked_directory_resolves_as_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("pkg")).unwrap();
        fs::write(temp.path().join("pkg/index.js"), "x").unwrap();
        std::os::unix::fs::symlink(temp.path().join("pkg"), temp.path().join("edrm-pkg"))
            .unwrap();

        let local = LocalFilesystem::new();
        let entries = local.read_dir(temp.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "edrm-pkg").unwrap();
        assert_eq!(link.kind, EntryKind::Other);
        assert!(local.is_dir(&link.path));
        assert!(!local.is_dir(&temp.path().join("pkg/index.js")));

        let inside = local.read_dir(&link.path).unwrap();
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].name, "index.js");
    }
}
