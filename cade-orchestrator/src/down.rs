use std::fs;

use cade_core::{cade_info, cade_progress};
use cade_messages::{msg, MESSAGES};
use cade_provider::Container;
use tracing::{debug, info, instrument};

use crate::error::{OrchestratorError, Result};
use crate::naming::WorkspaceName;
use crate::options::{DownOptions, TeardownReport};
use crate::WorkspaceOrchestrator;

impl WorkspaceOrchestrator<'_> {
    /// Stop and remove the workspace container, then delete its host
    /// working directory unless asked to keep it.
    ///
    /// A container that does not exist is an error from the stop step.
    #[instrument(skip(self, options), fields(persist = options.persist_workdir))]
    pub fn down(&self, workspace: &str, options: &DownOptions) -> Result<TeardownReport> {
        let workspace = WorkspaceName::parse(workspace)?;
        let container_name = workspace.container_name();
        let container = Container::named(&container_name);

        cade_progress!("{}", msg!(MESSAGES.down_stopping, container = container_name.as_str()));
        let output = self
            .runtime()
            .stop_container(&container)
            .map_err(|source| OrchestratorError::Stop {
                container: container_name.clone(),
                source,
            })?;
        debug!("stop output: {}", String::from_utf8_lossy(&output).trim_end());

        cade_progress!("{}", msg!(MESSAGES.down_removing, container = container_name.as_str()));
        self.runtime()
            .remove_container(&container)
            .map_err(|source| OrchestratorError::Remove {
                container: container_name.clone(),
                source,
            })?;

        let workdir = self.store().workdir_for(&workspace);
        let purged = if options.persist_workdir {
            cade_info!(
                "{}",
                msg!(MESSAGES.down_keeping_workdir, workdir = workdir.display().to_string())
            );
            false
        } else if workdir.exists() {
            cade_progress!(
                "{}",
                msg!(MESSAGES.down_purging, workdir = workdir.display().to_string())
            );
            fs::remove_dir_all(&workdir).map_err(|e| OrchestratorError::Purge {
                path: workdir.clone(),
                source: e.into(),
            })?;
            true
        } else {
            debug!("Working directory {} already gone", workdir.display());
            false
        };

        info!(workspace = %workspace, purged, "workspace torn down");
        Ok(TeardownReport {
            workspace: workspace.to_string(),
            container_name,
            workdir,
            purged,
        })
    }
}
