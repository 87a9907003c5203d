//! Validation of hazard-flagged time-series records.
//!
//! A record is an ordered series of numeric samples with a parallel boolean
//! hazard flag per sample, a description and a start date. [`validate`]
//! turns untyped input into an immutable [`TimeSeriesRecord`] or a
//! [`ValidationError`] naming the failing field.

pub mod adapters;
pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod input;
pub mod ports;
pub mod record;
pub mod store;
pub mod telemetry;
pub mod validate;

use clap::Parser;

pub use record::{HazardFlag, Sample, TimeSeriesRecord, ValidationError, ValidationErrorKind};
pub use validate::{check_all, validate, ValidationReport};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
