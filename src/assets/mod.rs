//! Opaque asset loading.
//!
//! Some files are imported by extension and handed around as an opaque value
//! that nothing in this crate interprets. The environment decides which
//! extensions are loadable; [`ExtensionAssetLoader`] enforces that and reads
//! the bytes through the filesystem port.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::context::ServiceContext;

/// Extension registered when the environment configures none.
pub const DEFAULT_ASSET_EXTENSION: &str = "vue";

/// Failure to load an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The path has no extension or one the environment did not register.
    #[error("unsupported asset extension for {path}: expected one of [{registered}]")]
    UnsupportedExtension {
        /// Path that was requested.
        path: String,
        /// Comma-separated registered extensions.
        registered: String,
    },
    /// The asset could not be read.
    #[error("failed to read asset {path}: {message}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O error text.
        message: String,
    },
}

/// Handle to a loaded asset. The contents are carried, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueAsset {
    path: PathBuf,
    extension: String,
    bytes: Vec<u8>,
}

impl OpaqueAsset {
    /// Path the asset was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lower-cased extension that matched the registration.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the asset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw contents.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Loads assets of registered kinds as opaque handles.
pub trait AssetLoader {
    /// Loads the asset at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the extension is not registered or the file
    /// cannot be read.
    fn load_asset(&self, path: &Path) -> Result<OpaqueAsset, AssetError>;
}

/// Asset loader that accepts a fixed set of file extensions.
pub struct ExtensionAssetLoader<'a> {
    ctx: &'a ServiceContext,
    extensions: BTreeSet<String>,
}

impl<'a> ExtensionAssetLoader<'a> {
    /// Creates a loader accepting the given extensions (case-insensitive,
    /// with or without a leading dot).
    ///
    /// An empty list registers [`DEFAULT_ASSET_EXTENSION`].
    #[must_use]
    pub fn new<I, S>(ctx: &'a ServiceContext, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registered: BTreeSet<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if registered.is_empty() {
            registered.insert(DEFAULT_ASSET_EXTENSION.to_string());
        }
        Self { ctx, extensions: registered }
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    fn matching_extension(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        self.extensions.contains(&ext).then_some(ext)
    }
}

impl AssetLoader for ExtensionAssetLoader<'_> {
    fn load_asset(&self, path: &Path) -> Result<OpaqueAsset, AssetError> {
        let extension =
            self.matching_extension(path).ok_or_else(|| AssetError::UnsupportedExtension {
                path: path.display().to_string(),
                registered: self.extensions().collect::<Vec<_>>().join(", "),
            })?;
        let bytes = self.ctx.fs.read_bytes(path).map_err(|e| AssetError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), %extension, bytes = bytes.len(), "loaded opaque asset");
        Ok(OpaqueAsset { path: path.to_path_buf(), extension, bytes })
    }
}
