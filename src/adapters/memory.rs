//! In-memory filesystem adapter.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::ports::filesystem::{FileSystem, PortError};

/// Filesystem held entirely in memory, keyed by path.
///
/// Directories exist implicitly as ancestors of stored files.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: RwLock<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `contents` at `path`, replacing any previous file.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.into(), contents.into());
    }

    /// Builder-style variant of [`Self::insert`].
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    fn get(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.get(path).cloned().ok_or_else(|| format!("file not found: {}", path.display()).into())
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(String::from_utf8(self.get(path)?)?)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        self.get(path)
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.keys().any(|k| k.starts_with(path))
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        if !files.keys().any(|k| k.starts_with(dir) && k != dir) {
            return Err(format!("not a directory: {}", dir.display()).into());
        }
        Ok(files.keys().filter(|k| k.parent() == Some(dir)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_inserted_files() {
        let fs = MemoryFileSystem::new().with_file("/data/a.json", "{}");
        assert_eq!(fs.read_to_string(Path::new("/data/a.json")).unwrap(), "{}");
        assert!(fs.read_bytes(Path::new("/data/b.json")).is_err());
    }

    #[test]
    fn directories_are_implicit() {
        let fs = MemoryFileSystem::new()
            .with_file("/data/b.json", "{}")
            .with_file("/data/a.yaml", "")
            .with_file("/data/nested/c.json", "{}");
        assert!(fs.exists(Path::new("/data")));
        assert!(fs.exists(Path::new("/data/nested")));
        assert!(!fs.exists(Path::new("/other")));
        assert_eq!(
            fs.list_files(Path::new("/data")).unwrap(),
            vec![PathBuf::from("/data/a.yaml"), PathBuf::from("/data/b.json")]
        );
        assert!(fs.list_files(Path::new("/other")).is_err());
    }

    #[test]
    fn invalid_utf8_fails_string_reads() {
        let fs = MemoryFileSystem::new().with_file("/bin.dat", vec![0xff_u8, 0xfe]);
        assert!(fs.read_to_string(Path::new("/bin.dat")).is_err());
        assert_eq!(fs.read_bytes(Path::new("/bin.dat")).unwrap(), vec![0xff, 0xfe]);
    }
}
