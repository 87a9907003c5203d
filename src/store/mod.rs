//! Record store: a read-only directory of record files.
//!
//! Every file directly under the root with a `.json`, `.yaml` or `.yml`
//! extension is a record candidate. All I/O goes through the `FileSystem`
//! port on the service context.
//!
//! ```text
//! <root>/
//!   ├── pump-a.json
//!   ├── pump-b.yaml
//!   └── notes.txt      (ignored)
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::context::ServiceContext;
use crate::input::InputFormat;
use crate::record::TimeSeriesRecord;
use crate::validate::{check_all, validate, ValidationReport};

/// Read-only access to record files.
pub struct RecordStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
    format: Option<InputFormat>,
}

impl<'a> RecordStore<'a> {
    /// Creates a store rooted at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf(), format: None }
    }

    /// Forces every file to be decoded as `format` instead of guessing from
    /// the extension.
    #[must_use]
    pub fn with_format(mut self, format: Option<InputFormat>) -> Self {
        self.format = format;
        self
    }

    /// The store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists record files directly under the root, sorted by path.
    ///
    /// A missing root is treated as an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the root exists but cannot be listed.
    pub fn list_records(&self) -> Result<Vec<PathBuf>, String> {
        if !self.ctx.fs.exists(&self.root) {
            debug!(root = %self.root.display(), "record store root does not exist");
            return Ok(Vec::new());
        }
        let files = self
            .ctx
            .fs
            .list_files(&self.root)
            .map_err(|e| format!("Failed to list records in {}: {e}", self.root.display()))?;
        let mut records: Vec<PathBuf> =
            files.into_iter().filter(|path| InputFormat::from_path(path).is_some()).collect();
        records.sort();
        Ok(records)
    }

    /// Reads and decodes a record file without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its format cannot be
    /// determined, or it is not well-formed.
    pub fn load_raw(&self, path: &Path) -> Result<Value, String> {
        let format = self
            .format
            .or_else(|| InputFormat::from_path(path))
            .ok_or_else(|| format!("Cannot tell the format of {}; use --format", path.display()))?;
        let text = self
            .ctx
            .fs
            .read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        debug!(path = %path.display(), %format, bytes = text.len(), "decoding record");
        format.decode(&text).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
    }

    /// Loads and validates a record file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or fails validation.
    pub fn load_record(&self, path: &Path) -> Result<TimeSeriesRecord, String> {
        let raw = self.load_raw(path)?;
        validate(&raw).map_err(|e| {
            warn!(path = %path.display(), field = %e.field, "record failed validation");
            format!("Invalid record {}: {e}", path.display())
        })
    }

    /// Loads a record file and runs every check against it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded; validation failures are
    /// reported inside the returned report.
    pub fn check_record(&self, path: &Path) -> Result<ValidationReport, String> {
        let raw = self.load_raw(path)?;
        Ok(check_all(&path.display().to_string(), &raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    const VALID_JSON: &str = r#"{
        "steps": [{"y": 1.0}, {"y": 4.5}],
        "hazard": [false, true],
        "hazardDescription": "overheat",
        "startDate": "2024-01-01T00:00:00Z"
    }"#;

    const VALID_YAML: &str = "steps:\n  - y: 2\nhazard: [false]\nhazardDescriptionn: legacy\nstartDate: 2024-06-01\n";

    fn store_fs() -> MemoryFileSystem {
        MemoryFileSystem::new()
            .with_file("/records/b.yaml", VALID_YAML)
            .with_file("/records/a.json", VALID_JSON)
            .with_file("/records/notes.txt", "ignore me")
            .with_file("/records/bad.json", r#"{"steps": [], "hazard": [true]}"#)
            .with_file("/records/broken.json", "{ nope")
    }

    #[test]
    fn lists_only_record_files() {
        let ctx = ServiceContext::with_fs(store_fs());
        let store = RecordStore::new(&ctx, Path::new("/records"));
        let records = store.list_records().unwrap();
        assert_eq!(
            records,
            vec![
                PathBuf::from("/records/a.json"),
                PathBuf::from("/records/b.yaml"),
                PathBuf::from("/records/bad.json"),
                PathBuf::from("/records/broken.json"),
            ]
        );
    }

    #[test]
    fn missing_root_is_empty() {
        let ctx = ServiceContext::with_fs(MemoryFileSystem::new());
        let store = RecordStore::new(&ctx, Path::new("/nowhere"));
        assert!(store.list_records().unwrap().is_empty());
    }

    #[test]
    fn loads_json_and_yaml_records() {
        let ctx = ServiceContext::with_fs(store_fs());
        let store = RecordStore::new(&ctx, Path::new("/records"));

        let json = store.load_record(Path::new("/records/a.json")).unwrap();
        assert_eq!(json.len(), 2);
        assert_eq!(json.hazard_count(), 1);

        let yaml = store.load_record(Path::new("/records/b.yaml")).unwrap();
        assert_eq!(yaml.hazard_description(), "legacy");
        assert_eq!(yaml.start_date().to_rfc3339(), "2024-06-01T00:00:00+00:00");
    }

    #[test]
    fn invalid_record_error_names_path_and_field() {
        let ctx = ServiceContext::with_fs(store_fs());
        let store = RecordStore::new(&ctx, Path::new("/records"));
        let err = store.load_record(Path::new("/records/bad.json")).unwrap_err();
        assert!(err.contains("/records/bad.json"));
        assert!(err.contains("hazard: length mismatch"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let ctx = ServiceContext::with_fs(store_fs());
        let store = RecordStore::new(&ctx, Path::new("/records"));
        let err = store.load_raw(Path::new("/records/broken.json")).unwrap_err();
        assert!(err.starts_with("Failed to parse /records/broken.json"));
    }

    #[test]
    fn unknown_extension_needs_explicit_format() {
        let fs = MemoryFileSystem::new().with_file("/in/record.txt", VALID_JSON);
        let ctx = ServiceContext::with_fs(fs);
        let store = RecordStore::new(&ctx, Path::new("/in"));
        assert!(store.load_raw(Path::new("/in/record.txt")).unwrap_err().contains("--format"));

        let store = store.with_format(Some(InputFormat::Json));
        assert!(store.load_record(Path::new("/in/record.txt")).is_ok());
    }

    #[test]
    fn check_record_reports_all_failures() {
        let ctx = ServiceContext::with_fs(store_fs());
        let store = RecordStore::new(&ctx, Path::new("/records"));
        let report = store.check_record(Path::new("/records/bad.json")).unwrap();
        assert_eq!(report.source, "/records/bad.json");
        let failed: Vec<&str> = report.failed_checks().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(failed, vec!["lengths", "hazardDescription", "startDate"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let ctx = ServiceContext::with_fs(store_fs());
        let store = RecordStore::new(&ctx, Path::new("/records"));
        let err = store.load_raw(Path::new("/records/zzz.json")).unwrap_err();
        assert!(err.starts_with("Failed to read /records/zzz.json"));
    }
}
