//! Docker command builder.
//!
//! Every Docker invocation goes through [`DockerCommand`] so that output
//! capture, error classification and logging stay consistent.

use cade_core::command_stream::{describe_command, run_captured, run_interactive};
use cade_core::error::{CadeError, Result};
use std::path::Path;
use tracing::debug;

/// Builder for Docker commands with fluent interface and consistent error handling.
#[derive(Debug, Clone)]
pub struct DockerCommand {
    program: String,
    args: Vec<String>,
}

impl DockerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add a single argument to the command.
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add `flag` only when `enabled`.
    pub fn flag_if(self, enabled: bool, flag: &str) -> Self {
        if enabled {
            self.arg(flag)
        } else {
            self
        }
    }

    /// Add `flag value` only when `value` is set.
    pub fn option<S: Into<String>>(self, flag: &str, value: Option<S>) -> Self {
        match value {
            Some(value) => self.arg(flag).arg(value),
            None => self,
        }
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// `docker <subcommand>` label used in error messages.
    fn operation(&self) -> String {
        let depth = match self.args.first().map(String::as_str) {
            Some("container") | Some("image") => 2,
            _ => 1,
        };
        let subcommand: Vec<&str> = self.args.iter().take(depth).map(String::as_str).collect();
        let program = Path::new(&self.program)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.clone());
        format!("{} {}", program, subcommand.join(" "))
    }

    /// Execute the command, returning its combined stdout/stderr.
    ///
    /// A non-zero exit becomes an error that carries the same output.
    pub fn execute(self) -> Result<Vec<u8>> {
        let captured = run_captured(&self.program, &self.args)?;
        if captured.success() {
            Ok(captured.output)
        } else {
            Err(classify_failure(
                &self.operation(),
                &describe_command(&self.program, &self.args),
                captured.status.code(),
                &captured.output,
            ))
        }
    }

    /// Execute the command with the terminal attached.
    pub fn execute_interactive(self) -> Result<()> {
        let status = run_interactive(&self.program, &self.args)?;
        if status.success() {
            Ok(())
        } else {
            Err(CadeError::runtime(
                self.operation(),
                format!("session ended with status {}", status),
                b"",
            ))
        }
    }
}

/// Maps a failed Docker command to the most specific error.
pub(crate) fn classify_failure(
    operation: &str,
    full_command: &str,
    code: Option<i32>,
    output: &[u8],
) -> CadeError {
    let text = String::from_utf8_lossy(output);
    if text.contains("Cannot connect to the Docker daemon") {
        return CadeError::DockerNotRunning;
    }
    if text.contains("permission denied") && text.contains("docker.sock") {
        return CadeError::DockerPermission;
    }

    debug!("Docker command failed ({:?}): {}", code, full_command);
    let message = match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };
    CadeError::runtime(operation, message, output)
}
