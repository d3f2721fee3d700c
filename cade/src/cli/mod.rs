// CLI argument parsing and definitions

use cade_orchestrator::DEFAULT_SHELL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cade")]
#[command(about = "Containerized development workspaces backed by Docker")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create and start a workspace from a configuration file or URL
    Up {
        /// Path or http(s) URL of the workspace configuration (.json, .yaml or .yml)
        source: String,

        /// Workspace name, overriding `workspace_name` from the configuration
        #[arg(short, long)]
        name: Option<String>,

        /// Build the image even if a prebuilt image is configured
        #[arg(short, long)]
        build: bool,

        /// Build context directory, overriding the configured one
        #[arg(short, long)]
        context: Option<PathBuf>,
    },
    /// Stop and remove a workspace
    Down {
        /// Workspace name
        workspace: String,

        /// Keep the workspace's working directory on the host
        #[arg(long)]
        persist_workdir: bool,
    },
    /// Open an interactive shell in a running workspace
    Term {
        /// Workspace name
        workspace: String,

        /// Shell to start inside the container
        #[arg(long, default_value = DEFAULT_SHELL)]
        shell: String,

        /// User to run the shell as
        #[arg(short, long)]
        user: Option<String>,
    },
    /// List workspaces
    List,
    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_up_flags() {
        let args = Args::parse_from([
            "cade", "up", "cade.yaml", "-n", "api", "-b", "-c", "./docker",
        ]);
        match args.command {
            Command::Up {
                source,
                name,
                build,
                context,
            } => {
                assert_eq!(source, "cade.yaml");
                assert_eq!(name.as_deref(), Some("api"));
                assert!(build);
                assert_eq!(context, Some(PathBuf::from("./docker")));
            }
            other => panic!("expected up, got {other:?}"),
        }
    }

    #[test]
    fn test_term_defaults_to_bash() {
        let args = Args::parse_from(["cade", "term", "api"]);
        match args.command {
            Command::Term { shell, user, .. } => {
                assert_eq!(shell, "/bin/bash");
                assert!(user.is_none());
            }
            other => panic!("expected term, got {other:?}"),
        }
    }

    #[test]
    fn test_global_debug_after_subcommand() {
        let args = Args::parse_from(["cade", "down", "api", "--persist-workdir", "-d"]);
        assert!(args.debug);
        assert!(matches!(
            args.command,
            Command::Down {
                persist_workdir: true,
                ..
            }
        ));
    }
}
