//! Binary entrypoint for the `hazard-record` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is fine; settings fall back to defaults.
    let _ = dotenvy::dotenv();
    hazard_record::telemetry::init();

    match hazard_record::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
