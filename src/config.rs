//! Environment-driven settings.
//!
//! `main` loads a `.env` file (if any) before these are read.

use std::path::PathBuf;

/// Store root used when `HAZARD_RECORD_STORE` is unset.
pub const DEFAULT_STORE_DIR: &str = "records";

/// Env var naming the record store root.
pub const STORE_ENV: &str = "HAZARD_RECORD_STORE";
/// Env var listing asset extensions, comma-separated.
pub const ASSET_EXTENSIONS_ENV: &str = "HAZARD_RECORD_ASSET_EXTENSIONS";
/// Env var holding the log filter directive.
pub const LOG_ENV: &str = "HAZARD_RECORD_LOG";

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root directory of the record store.
    pub store_dir: PathBuf,
    /// Extensions the asset loader accepts.
    pub asset_extensions: Vec<String>,
}

impl Settings {
    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_dir = lookup(STORE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_DIR), PathBuf::from);
        let asset_extensions: Vec<String> = lookup(ASSET_EXTENSIONS_ENV)
            .map(|v| {
                v.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
            })
            .unwrap_or_default();
        Self { store_dir, asset_extensions }
    }
}
