//! Workspace configuration for cade.
//!
//! A workspace is described by a JSON or YAML document, read from a local
//! path or fetched over HTTP(S). This crate turns that document into a
//! validated [`WorkspaceConfig`].

pub mod config;
pub mod loader;
pub mod validate;

pub use config::{Volume, WorkspaceConfig};
pub use loader::{parse_workspace_config, ConfigFormat, ConfigLoader};
pub use validate::ConfigValidator;
