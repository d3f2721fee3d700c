//! Host-side workspace directories.

use std::path::{Path, PathBuf};

use cade_core::user_paths::workspace_storage_dir;

use crate::naming::WorkspaceName;

/// Base directory holding one working directory per workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceStore {
    base: PathBuf,
}

impl WorkspaceStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The store under the user's home (`~/.cade/tmp`).
    pub fn from_home() -> cade_core::Result<Self> {
        Ok(Self::new(workspace_storage_dir()?))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn workdir_for(&self, workspace: &WorkspaceName) -> PathBuf {
        self.base.join(workspace.as_str())
    }
}
