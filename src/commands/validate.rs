//! `hazard-record validate` command.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::input::InputFormat;
use crate::store::RecordStore;
use crate::validate::format_report;

/// Execute the `validate` command.
///
/// Validates each path (or every record in the store when `all` is set) and
/// prints one line per record, or a full per-check report with `report`.
///
/// # Errors
///
/// Returns an error string if any record cannot be loaded or fails
/// validation, or if there is nothing to validate.
pub fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    paths: &[PathBuf],
    all: bool,
    format: Option<InputFormat>,
    report: bool,
) -> Result<(), String> {
    let store = RecordStore::new(ctx, &settings.store_dir).with_format(format);
    let targets = if all { store.list_records()? } else { paths.to_vec() };

    if targets.is_empty() {
        return Err(if all {
            format!("No records found in {}", store.root().display())
        } else {
            "No record paths given; pass <PATHS>... or --all".to_string()
        });
    }

    let mut failed = 0usize;
    for (index, path) in targets.iter().enumerate() {
        let ok = if report {
            if index > 0 {
                println!();
            }
            validate_with_report(&store, path)
        } else {
            validate_one(&store, path)
        };
        if !ok {
            failed += 1;
        }
    }

    info!(total = targets.len(), failed, "validation finished");
    if failed == 0 {
        Ok(())
    } else {
        Err(format!("{failed} of {} records failed validation", targets.len()))
    }
}

fn validate_one(store: &RecordStore<'_>, path: &Path) -> bool {
    match store.load_record(path) {
        Ok(record) => {
            println!("OK {} ({} samples)", path.display(), record.len());
            true
        }
        Err(e) => {
            println!("FAIL {e}");
            false
        }
    }
}

fn validate_with_report(store: &RecordStore<'_>, path: &Path) -> bool {
    match store.check_record(path) {
        Ok(report) => {
            println!("{}", format_report(&report));
            report.passed()
        }
        Err(e) => {
            println!("Record: {}\n\n  [FAIL] load\n         {e}", path.display());
            false
        }
    }
}
