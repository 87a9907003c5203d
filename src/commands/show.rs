//! `hazard-record show` command.

use std::path::Path;

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::record::TimeSeriesRecord;
use crate::store::RecordStore;

/// Execute the `show` command.
///
/// When `path` is provided, validates the record and prints a summary (or
/// the normalized record as JSON). Without a path, lists the store's records.
///
/// # Errors
///
/// Returns an error string if the record cannot be loaded or is invalid.
pub fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    path: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let store = RecordStore::new(ctx, &settings.store_dir);

    if let Some(path) = path {
        let record = store.load_record(path)?;
        if json {
            let text = serde_json::to_string_pretty(&record)
                .map_err(|e| format!("Failed to serialize {}: {e}", path.display()))?;
            println!("{text}");
        } else {
            println!("{}", summarize(path, &record));
        }
        return Ok(());
    }

    let records = store.list_records()?;
    if records.is_empty() {
        println!("No records found in {}.", store.root().display());
    } else {
        println!("Available records:");
        for record in &records {
            println!("  {}", record.display());
        }
        println!("\nUse `hazard-record show <PATH>` to view details.");
    }
    Ok(())
}

fn summarize(path: &Path, record: &TimeSeriesRecord) -> String {
    let mut lines = vec![
        format!("Record: {}", path.display()),
        format!("Start: {}", record.start_date().to_rfc3339()),
        format!("Samples: {}", record.len()),
        format!("Hazards: {}", record.hazard_count()),
    ];
    if !record.hazard_description().is_empty() {
        lines.push(format!("Description: {}", record.hazard_description()));
    }
    if !record.is_empty() {
        lines.push(String::new());
        for (index, (sample, flag)) in record.pairs().enumerate() {
            let marker = if flag.is_hazard() { "  HAZARD" } else { "" };
            lines.push(format!("  {index:>4}  {:>12}{marker}", sample.y));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::adapters::memory::MemoryFileSystem;
    use crate::validate::validate;

    const GOOD: &str = r#"{"steps":[{"y":1.5},{"y":-2}],"hazard":[false,true],"hazardDescription":"surge","startDate":"2024-01-01"}"#;

    fn settings() -> Settings {
        Settings { store_dir: PathBuf::from("/records"), asset_extensions: Vec::new() }
    }

    fn ctx() -> ServiceContext {
        ServiceContext::with_fs(
            MemoryFileSystem::new()
                .with_file("/records/a.json", GOOD)
                .with_file("/records/bad.json", "{}"),
        )
    }

    #[test]
    fn shows_valid_record() {
        let ctx = ctx();
        assert!(run(&ctx, &settings(), Some(Path::new("/records/a.json")), false).is_ok());
        assert!(run(&ctx, &settings(), Some(Path::new("/records/a.json")), true).is_ok());
    }

    #[test]
    fn invalid_record_is_an_error() {
        let ctx = ctx();
        let err = run(&ctx, &settings(), Some(Path::new("/records/bad.json")), false).unwrap_err();
        assert!(err.contains("steps: required field is missing"));
    }

    #[test]
    fn lists_store_without_path() {
        let ctx = ctx();
        assert!(run(&ctx, &settings(), None, false).is_ok());
        let empty = ServiceContext::with_fs(MemoryFileSystem::new());
        assert!(run(&empty, &settings(), None, false).is_ok());
    }

    #[test]
    fn summary_marks_hazards() {
        let value: serde_json::Value = serde_json::from_str(GOOD).unwrap();
        let record = validate(&value).unwrap();
        let text = summarize(Path::new("a.json"), &record);
        assert!(text.contains("Start: 2024-01-01T00:00:00+00:00"));
        assert!(text.contains("Samples: 2"));
        assert!(text.contains("Hazards: 1"));
        assert!(text.contains("Description: surge"));
        let lines: Vec<&str> = text.lines().collect();
        assert!(!lines[lines.len() - 2].contains("HAZARD"));
        assert!(lines[lines.len() - 1].ends_with("HAZARD"));
    }
}
