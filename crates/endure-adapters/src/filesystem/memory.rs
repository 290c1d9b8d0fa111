//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use endure_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::EndureResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle after boxing one
/// into a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn insert_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> EndureResult<()> {
        let path = path.as_ref();
        let mut inner = self.write_lock()?;
        if let Some(parent) = path.parent() {
            inner.insert_dirs(parent);
        }
        inner
            .files
            .insert(path.to_path_buf(), content.as_ref().to_vec());
        Ok(())
    }

    /// Read a file as UTF-8 text (testing helper).
    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let bytes = inner.files.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    fn read_lock(&self) -> EndureResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }

    fn write_lock(&self) -> EndureResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_dir(&self, path: &Path) -> EndureResult<Vec<DirEntry>> {
        let inner = self.read_lock()?;

        if !inner.directories.contains(path) {
            if inner.files.contains_key(path) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Not a directory".into(),
                }
                .into());
            }
            return Err(ApplicationError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let children = inner
            .directories
            .iter()
            .map(|p| (p, EntryKind::Directory))
            .chain(inner.files.keys().map(|p| (p, EntryKind::File)))
            .filter(|(p, _)| p.parent() == Some(path));

        let mut entries: Vec<DirEntry> = children
            .filter_map(|(p, kind)| {
                let name = p.file_name()?.to_string_lossy().into_owned();
                Some(DirEntry::new(name, p.clone(), kind))
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> EndureResult<()> {
        self.write_lock()?.insert_dirs(path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> EndureResult<()> {
        let mut inner = self.write_lock()?;

        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound {
                path: from.to_path_buf(),
            })?;

        if !inner.parent_exists(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn read(&self, path: &Path) -> EndureResult<Vec<u8>> {
        let inner = self.read_lock()?;
        let content = inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound {
                path: path.to_path_buf(),
            })?;
        Ok(content)
    }

    fn write(&self, path: &Path, content: &[u8]) -> EndureResult<()> {
        let mut inner = self.write_lock()?;

        if !inner.parent_exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}
