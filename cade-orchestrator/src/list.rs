use tracing::{debug, instrument};

use crate::error::{OrchestratorError, Result};
use crate::naming::workspace_from_container_name;
use crate::WorkspaceOrchestrator;

impl WorkspaceOrchestrator<'_> {
    /// Names of all workspaces with a container, in the runtime's order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<String>> {
        let containers = self
            .runtime()
            .container_list()
            .map_err(|source| OrchestratorError::List { source })?;
        debug!("Runtime reported {} containers", containers.len());

        Ok(containers
            .iter()
            .filter_map(|c| workspace_from_container_name(&c.name))
            .map(str::to_string)
            .collect())
    }
}
