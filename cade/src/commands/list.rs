use anyhow::Result;

use cade_core::{cade_info, cade_println};
use cade_messages::MESSAGES;

use super::with_orchestrator;

pub fn handle_list() -> Result<()> {
    let workspaces = with_orchestrator(|orchestrator| Ok(orchestrator.list()?))?;

    if workspaces.is_empty() {
        cade_info!("{}", MESSAGES.list_empty);
        return Ok(());
    }

    for workspace in workspaces {
        cade_println!("{}", workspace);
    }
    Ok(())
}
