use cade_core::cade_progress;
use cade_messages::{msg, MESSAGES};
use cade_provider::ExecOptions;
use tracing::instrument;

use crate::error::{OrchestratorError, Result};
use crate::naming::WorkspaceName;
use crate::options::TermOptions;
use crate::WorkspaceOrchestrator;

impl WorkspaceOrchestrator<'_> {
    /// Attach an interactive shell to the workspace container. Blocks until
    /// the shell exits.
    #[instrument(skip(self, options))]
    pub fn term(&self, workspace: &str, options: &TermOptions) -> Result<()> {
        let workspace = WorkspaceName::parse(workspace)?;
        let container_name = workspace.container_name();

        let exec_options = ExecOptions {
            user: options.user.clone(),
            ..ExecOptions::interactive_tty()
        };

        cade_progress!("{}", msg!(MESSAGES.term_attaching, name = workspace.as_str()));
        self.runtime()
            .exec(&exec_options, &container_name, &[options.shell.clone()])
            .map_err(|source| OrchestratorError::Exec {
                container: container_name,
                source,
            })
    }
}
