// Command handlers

use anyhow::Result;
use tracing::debug;

use crate::cli::{Args, Command};
use cade_orchestrator::{WorkspaceOrchestrator, WorkspaceStore};
use cade_provider::{get_runtime, ContainerRuntime};

pub mod down;
pub mod list;
pub mod term;
pub mod up;
pub mod version;

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args) -> Result<()> {
    match args.command {
        Command::Up {
            source,
            name,
            build,
            context,
        } => {
            debug!("Handling up command");
            up::handle_up(&source, name, build, context)
        }
        Command::Down {
            workspace,
            persist_workdir,
        } => {
            debug!("Handling down command");
            down::handle_down(&workspace, persist_workdir)
        }
        Command::Term {
            workspace,
            shell,
            user,
        } => {
            debug!("Handling term command");
            term::handle_term(&workspace, shell, user)
        }
        Command::List => {
            debug!("Handling list command");
            list::handle_list()
        }
        Command::Version => {
            version::handle_version();
            Ok(())
        }
    }
}

/// Runs `f` against an orchestrator backed by the Docker runtime and the
/// workspace store under the user's home.
fn with_orchestrator<T>(f: impl FnOnce(&WorkspaceOrchestrator<'_>) -> Result<T>) -> Result<T> {
    let runtime: Box<dyn ContainerRuntime> = get_runtime()?;
    debug!("Using {} runtime", runtime.name());
    let store = WorkspaceStore::from_home()?;
    let orchestrator = WorkspaceOrchestrator::new(&*runtime, store);
    f(&orchestrator)
}
