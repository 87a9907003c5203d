//! Command dispatch and handlers.

pub mod asset;
pub mod show;
pub mod validate;

use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler using the live filesystem and
/// settings from the environment.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let settings = Settings::from_env();
    dispatch_with_context(command, &ctx, &settings)
}

/// Dispatch a command with the given service context and settings.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: &Settings,
) -> Result<(), String> {
    match command {
        Command::Validate { paths, all, format, report } => {
            validate::run(ctx, settings, paths, *all, *format, *report)
        }
        Command::Show { path, json } => show::run(ctx, settings, path.as_deref(), *json),
        Command::Asset { path } => asset::run(ctx, settings, path),
    }
}
