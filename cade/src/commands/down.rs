use anyhow::Result;

use cade_core::cade_success;
use cade_messages::{msg, MESSAGES};
use cade_orchestrator::DownOptions;

use super::with_orchestrator;

pub fn handle_down(workspace: &str, persist_workdir: bool) -> Result<()> {
    let options = DownOptions { persist_workdir };
    let report = with_orchestrator(|orchestrator| Ok(orchestrator.down(workspace, &options)?))?;

    cade_success!("{}", msg!(MESSAGES.down_success, name = report.workspace.as_str()));
    Ok(())
}
