// Standard library
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::process::ExitStatus;

// External crates
use crate::error::{CadeError, Result};
use duct::cmd;
use tracing::debug;
use which::which;

/// Result of a command whose stdout and stderr were captured together.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub output: Vec<u8>,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Renders `command args...` for logs and error messages.
pub fn describe_command<A: AsRef<OsStr>>(command: &str, args: &[A]) -> String {
    let mut parts = vec![command.to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}

fn spawn_error(command: &str, err: std::io::Error) -> CadeError {
    if err.kind() == ErrorKind::NotFound {
        CadeError::Dependency(command.to_string())
    } else {
        CadeError::Internal(format!("Failed to start command '{}': {}", command, err))
    }
}

/// Runs a command to completion, capturing stderr interleaved into stdout.
///
/// A non-zero exit is not an error here; callers inspect the status and
/// decide how to surface the captured output.
pub fn run_captured<A: AsRef<OsStr>>(command: &str, args: &[A]) -> Result<CapturedOutput> {
    debug!("Running: {}", describe_command(command, args));

    let output = cmd(command, args)
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()
        .map_err(|e| spawn_error(command, e))?;

    Ok(CapturedOutput {
        status: output.status,
        output: output.stdout,
    })
}

/// Runs a command with the caller's stdin, stdout and stderr attached.
///
/// Blocks until the child exits. Nothing is buffered, which is what an
/// interactive terminal session needs.
pub fn run_interactive<A: AsRef<OsStr>>(command: &str, args: &[A]) -> Result<ExitStatus> {
    debug!("Attaching: {}", describe_command(command, args));

    let output = cmd(command, args)
        .unchecked()
        .run()
        .map_err(|e| spawn_error(command, e))?;

    Ok(output.status)
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}
