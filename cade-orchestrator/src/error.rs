use std::path::PathBuf;

use cade_core::CadeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// A failed orchestration step. Each variant names the step and keeps the
/// underlying error, including any raw runtime output, as its source.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid workspace name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Failed to build image '{tag}': {source}")]
    Build { tag: String, source: CadeError },

    #[error("Failed to prepare workspace storage {}: {source}", .path.display())]
    Storage { path: PathBuf, source: CadeError },

    #[error("Failed to seed working directory {}: {source}", .path.display())]
    Seed { path: PathBuf, source: CadeError },

    #[error("Failed to start container '{container}': {source}")]
    Run { container: String, source: CadeError },

    #[error("Failed to stop container '{container}': {source}")]
    Stop { container: String, source: CadeError },

    #[error("Failed to remove container '{container}': {source}")]
    Remove { container: String, source: CadeError },

    #[error("Failed to remove working directory {}: {source}", .path.display())]
    Purge { path: PathBuf, source: CadeError },

    #[error("Failed to open a terminal in '{container}': {source}")]
    Exec { container: String, source: CadeError },

    #[error("Failed to list containers: {source}")]
    List { source: CadeError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_context_and_output_in_message() {
        let err = OrchestratorError::Build {
            tag: "demo".to_string(),
            source: CadeError::runtime("docker build", "exit status 1", b"unknown instruction: FORM"),
        };
        let text = err.to_string();
        assert!(text.starts_with("Failed to build image 'demo'"));
        assert!(text.ends_with("| out: unknown instruction: FORM"));
    }

    #[test]
    fn test_path_steps_show_path() {
        let err = OrchestratorError::Purge {
            path: PathBuf::from("/home/u/.cade/tmp/demo"),
            source: CadeError::Filesystem("busy".to_string()),
        };
        assert!(err.to_string().contains("/home/u/.cade/tmp/demo"));
    }
}
