use std::path::PathBuf;

use anyhow::Result;

use cade_config::parse_workspace_config;
use cade_core::{cade_progress, cade_success};
use cade_messages::{msg, MESSAGES};
use cade_orchestrator::UpOptions;

use super::with_orchestrator;

pub fn handle_up(
    source: &str,
    name: Option<String>,
    build: bool,
    context: Option<PathBuf>,
) -> Result<()> {
    // Configuration problems are reported before the runtime is touched.
    cade_progress!("{}", msg!(MESSAGES.up_parsing_config, source = source));
    let config = parse_workspace_config(source)?;

    let options = UpOptions {
        name,
        force_build: build,
        context,
    };

    let report = with_orchestrator(|orchestrator| Ok(orchestrator.up(&config, &options)?))?;

    cade_success!(
        "{}",
        msg!(
            MESSAGES.up_ready,
            name = report.workspace.as_str(),
            workdir = report.workdir.display().to_string()
        )
    );
    Ok(())
}
