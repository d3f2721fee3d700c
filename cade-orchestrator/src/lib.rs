//! Workspace lifecycle orchestration.
//!
//! [`WorkspaceOrchestrator`] drives the `up`, `down`, `term` and `list`
//! sequences against a [`ContainerRuntime`]. Every step is attempted once;
//! the first failure aborts the sequence and is returned with the step that
//! failed. Nothing is rolled back.

pub mod error;
pub mod naming;
pub mod options;
pub mod storage;

mod down;
mod list;
mod term;
mod up;

pub use error::{OrchestratorError, Result};
pub use naming::{container_name, workspace_from_container_name, WorkspaceName, CONTAINER_PREFIX};
pub use options::{
    DownOptions, ProvisionReport, TeardownReport, TermOptions, UpOptions, DEFAULT_SHELL,
};
pub use storage::WorkspaceStore;

use cade_provider::ContainerRuntime;

pub struct WorkspaceOrchestrator<'a> {
    runtime: &'a dyn ContainerRuntime,
    store: WorkspaceStore,
}

impl<'a> WorkspaceOrchestrator<'a> {
    pub fn new(runtime: &'a dyn ContainerRuntime, store: WorkspaceStore) -> Self {
        Self { runtime, store }
    }

    pub fn runtime(&self) -> &dyn ContainerRuntime {
        self.runtime
    }

    pub fn store(&self) -> &WorkspaceStore {
        &self.store
    }
}
