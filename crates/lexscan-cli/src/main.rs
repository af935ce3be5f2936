use lexscan_core::{logging, LexscanError};
use std::io::{self, Write};

mod cli;

use crate::cli::CliCommand;

/// Exit status for a prompt abandoned with end of input.
const EXIT_CANCELLED: i32 = 130;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        let code = report_failure(&err, &mut io::stderr().lock());
        std::process::exit(code);
    }
}

/// Writes the single user-facing message for `err` and returns the exit status.
fn report_failure(err: &anyhow::Error, out: &mut dyn Write) -> i32 {
    if matches!(
        err.downcast_ref::<LexscanError>(),
        Some(LexscanError::UserCancelled)
    ) {
        let _ = writeln!(out, "\nOperation cancelled by user");
        return EXIT_CANCELLED;
    }
    tracing::error!("{:#}", err);
    let _ = writeln!(out, "Error: {:#}", err);
    1
}
