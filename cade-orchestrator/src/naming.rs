//! Workspace names and the container names derived from them.
//!
//! A workspace is bound to its runtime container purely by name: the
//! container is always `CONTAINER_PREFIX` followed by the workspace name.

use std::fmt;

use crate::error::{OrchestratorError, Result};

/// Prefix shared by every container this tool manages.
pub const CONTAINER_PREFIX: &str = "cade-workspace-";

/// A validated, user-facing workspace name.
///
/// Names follow the container runtime's own naming rules, so distinct
/// workspace names always map to distinct container names and directories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceName(String);

impl WorkspaceName {
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| OrchestratorError::InvalidName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = raw.chars();
        match chars.next() {
            None => return Err(invalid("name is empty")),
            Some(first) if !first.is_ascii_alphanumeric() => {
                return Err(invalid("must start with a letter or digit"))
            }
            Some(_) => {}
        }

        if chars.any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))) {
            return Err(invalid(
                "only letters, digits, '_', '.' and '-' are allowed",
            ));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn container_name(&self) -> String {
        container_name(self)
    }
}

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WorkspaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn container_name(workspace: &WorkspaceName) -> String {
    format!("{}{}", CONTAINER_PREFIX, workspace.as_str())
}

/// Recovers the workspace name from a runtime container name.
///
/// Returns `None` for containers this tool does not manage.
pub fn workspace_from_container_name(name: &str) -> Option<&str> {
    let name = name.strip_prefix('/').unwrap_or(name);
    name.strip_prefix(CONTAINER_PREFIX)
        .filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_name_has_prefix() {
        let ws = WorkspaceName::parse("cade-test").unwrap();
        assert_eq!(ws.container_name(), "cade-workspace-cade-test");
    }

    #[test]
    fn test_round_trip_through_container_name() {
        for raw in ["a", "my.project", "team_1-api", "9lives"] {
            let ws = WorkspaceName::parse(raw).unwrap();
            assert_eq!(workspace_from_container_name(&ws.container_name()), Some(raw));
        }
    }

    #[test]
    fn test_distinct_names_give_distinct_containers() {
        let names = ["demo", "demo-", "demo.1", "Demo", "demo_1", "demo-1"];
        let mut containers: Vec<String> = names
            .iter()
            .map(|n| WorkspaceName::parse(n).unwrap().container_name())
            .collect();
        containers.sort();
        containers.dedup();
        assert_eq!(containers.len(), names.len());
    }

    #[test]
    fn test_rejects_invalid_names() {
        for raw in ["", "-leading", ".hidden", "has space", "a/b", "../escape", "ünï"] {
            assert!(
                matches!(
                    WorkspaceName::parse(raw),
                    Err(OrchestratorError::InvalidName { .. })
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_helper_names_never_shadow_workspaces() {
        use cade_provider::docker::helper_name;

        let names = ["demo", "demo-copier", "copier", "cade-copier-demo", "a.b"];
        let containers: Vec<String> = names
            .iter()
            .map(|n| WorkspaceName::parse(n).unwrap().container_name())
            .collect();

        for container in &containers {
            let helper = helper_name(container);
            assert!(!containers.contains(&helper), "{helper} collides");
            assert_eq!(workspace_from_container_name(&helper), None);
        }
    }

    #[test]
    fn test_foreign_containers_are_ignored() {
        assert_eq!(workspace_from_container_name("postgres"), None);
        assert_eq!(workspace_from_container_name("cade-workspace-"), None);
        assert_eq!(workspace_from_container_name("x-cade-workspace-demo"), None);
        assert_eq!(workspace_from_container_name("/cade-workspace-demo"), Some("demo"));
    }
}
