//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::input::InputFormat;

/// Top-level CLI parser for `hazard-record`.
#[derive(Debug, Parser)]
#[command(name = "hazard-record", version, about = "Validate hazard-flagged time-series records")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate record files.
    Validate {
        /// Record files to validate.
        #[arg(required_unless_present = "all")]
        paths: Vec<PathBuf>,
        /// Validate every record in the store.
        #[arg(long, conflicts_with = "paths")]
        all: bool,
        /// Decode inputs as this format instead of guessing from the extension.
        #[arg(long, value_enum)]
        format: Option<InputFormat>,
        /// Print a per-check report instead of one line per record.
        #[arg(long)]
        report: bool,
    },
    /// Show a validated record, or list the store when no path is given.
    Show {
        /// Record file to show.
        path: Option<PathBuf>,
        /// Print the normalized record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Load an opaque asset and print its size.
    Asset {
        /// Asset file to load.
        path: PathBuf,
    },
}
