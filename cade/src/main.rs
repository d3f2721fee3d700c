// Standard library
use std::process::ExitCode;

// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use cade_core::{cade_error, cade_error_hint, CadeError};
use cade_logging::{init_subscriber, LogSettings};
use cade_messages::{msg, MESSAGES};

// Local modules
mod cli;
mod commands;

use cli::Args;
use commands::execute_command;

fn main() -> ExitCode {
    let args = Args::parse();

    // Tests expect clean output, so logging stays off in test mode.
    let _log_guard = if std::env::var("CADE_TEST_MODE").is_err() {
        init_subscriber(&LogSettings::from_env().with_debug(args.debug))
    } else {
        None
    };

    debug!("Starting cade command: {:?}", args.command);

    // The log guard has to drop before the process ends to flush file output.
    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cade_error!("{}", msg!(MESSAGES.error_generic, error = e.to_string()));
            if is_runtime_failure(&e) {
                cade_error_hint!("{}", MESSAGES.hint_docker_check);
            }
            ExitCode::FAILURE
        }
    }
}

fn is_runtime_failure(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<CadeError>(),
            Some(CadeError::Runtime { .. })
                | Some(CadeError::DockerNotRunning)
                | Some(CadeError::DockerPermission)
        )
    })
}
