use anyhow::Result;

use cade_orchestrator::TermOptions;

use super::with_orchestrator;

pub fn handle_term(workspace: &str, shell: String, user: Option<String>) -> Result<()> {
    let options = TermOptions { shell, user };
    with_orchestrator(|orchestrator| Ok(orchestrator.term(workspace, &options)?))
}
