//! User directory locations for the cade tool.
//!
//! Everything cade persists lives under `~/.cade`.

use crate::error::{CadeError, Result};
use std::path::PathBuf;

/// Name of the state directory under the user's home.
pub const STATE_DIR_NAME: &str = ".cade";

/// Subdirectory of the state directory holding one directory per workspace.
pub const WORKSPACE_DIR_NAME: &str = "tmp";

/// Resolve the current user's home directory.
#[must_use = "home directory path should be used"]
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| CadeError::Filesystem("Could not determine the user home directory".into()))
}

/// Get the cade state directory (`~/.cade`).
#[must_use = "state directory path should be used"]
pub fn cade_state_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(STATE_DIR_NAME))
}

/// Get the base directory holding workspace working directories (`~/.cade/tmp`).
#[must_use = "workspace storage path should be used"]
pub fn workspace_storage_dir() -> Result<PathBuf> {
    Ok(cade_state_dir()?.join(WORKSPACE_DIR_NAME))
}

/// Get the default log file location (`~/.cade/logs/cade.log`).
#[must_use = "log file path should be used"]
pub fn default_log_file() -> Result<PathBuf> {
    Ok(cade_state_dir()?.join("logs").join("cade.log"))
}
