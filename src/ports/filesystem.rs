//! Filesystem port for reading record files and assets.

use std::path::{Path, PathBuf};

/// Boxed error returned by port methods.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only filesystem access.
///
/// Record loading and asset loading go through this trait so they can run
/// against an in-memory tree in tests.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Reads the raw bytes of a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, PortError>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the regular files directly inside a directory, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, PortError>;
}
