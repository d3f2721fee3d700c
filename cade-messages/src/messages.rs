//! Central registry for all user-facing message templates.
//!
//! Naming Convention:
//! - `error_*` / `hint_*` - Shared across commands
//! - `{command}_{component}` - Command-specific messages (e.g., up_*, down_*)
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

pub struct Messages {
    // ============================================================================
    // Error Messages
    // ============================================================================
    pub error_generic: &'static str,
    pub hint_docker_check: &'static str,

    // ============================================================================
    // Up Messages
    // ============================================================================
    pub up_building: &'static str,
    pub up_creating: &'static str,
    pub up_empty_workdir: &'static str,
    pub up_parsing_config: &'static str,
    pub up_preparing_storage: &'static str,
    pub up_ready: &'static str,
    pub up_rebuilding: &'static str,
    pub up_reusing_workdir: &'static str,
    pub up_running: &'static str,
    pub up_seeding: &'static str,
    pub up_using_image: &'static str,

    // ============================================================================
    // Down Messages
    // ============================================================================
    pub down_keeping_workdir: &'static str,
    pub down_purging: &'static str,
    pub down_removing: &'static str,
    pub down_stopping: &'static str,
    pub down_success: &'static str,

    // ============================================================================
    // Term / List Messages
    // ============================================================================
    pub list_empty: &'static str,
    pub term_attaching: &'static str,
}

pub const MESSAGES: Messages = Messages {
    error_generic: "Error: {error}",
    hint_docker_check: "Try:\n  • Check Docker: docker ps\n  • List workspaces: cade list",

    up_building: "No prebuilt image found, building image '{tag}'",
    up_creating: "Creating containerized workspace: {name}",
    up_empty_workdir: "The image has nothing at {mount}; starting with an empty working directory",
    up_parsing_config: "Parsing the workspace configuration: {source}",
    up_preparing_storage: "Preparing workspace storage: {path}",
    up_ready: "Workspace ready! The workspace name is {name} and the mounted working directory is {workdir}",
    up_rebuilding: "Rebuild requested, building image '{tag}'",
    up_reusing_workdir: "Reusing existing working directory: {workdir}",
    up_running: "Running the workspace container: {container}",
    up_seeding: "Seeding working directory {workdir} from {mount} in the image",
    up_using_image: "Using prebuilt image: {image}",

    down_keeping_workdir: "Keeping the workspace directory: {workdir}",
    down_purging: "Cleaning up the workspace directory: {workdir}",
    down_removing: "Removing the workspace container: {container}",
    down_stopping: "Stopping the workspace container: {container}",
    down_success: "Workspace '{name}' removed",

    list_empty: "No workspaces found",
    term_attaching: "Starting a terminal in workspace: {name}",
};
