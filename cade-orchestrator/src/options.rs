//! Per-call options and the reports each operation returns.

use std::path::PathBuf;

/// Default interactive shell for `term`.
pub const DEFAULT_SHELL: &str = "/bin/bash";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpOptions {
    /// Overrides the configuration's `workspace_name`.
    pub name: Option<String>,
    /// Build the image even when a prebuilt one is configured.
    pub force_build: bool,
    /// Overrides the configured build context.
    pub context: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownOptions {
    /// Keep the host working directory after removing the container.
    pub persist_workdir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermOptions {
    pub shell: String,
    pub user: Option<String>,
}

impl Default for TermOptions {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            user: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub workspace: String,
    pub container_name: String,
    pub image: String,
    pub workdir: PathBuf,
    /// The image was built during this call.
    pub built: bool,
    /// The working directory was seeded from the image during this call.
    pub seeded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeardownReport {
    pub workspace: String,
    pub container_name: String,
    pub workdir: PathBuf,
    pub purged: bool,
}
