use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Build context used when neither the command line nor the configuration sets one.
pub const DEFAULT_BUILD_CONTEXT: &str = ".";

/// A host path bound into the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// The path on the host
    #[serde(alias = "hostpath", alias = "HostPath")]
    pub host_path: PathBuf,
    /// The path in the container
    #[serde(alias = "mountpath", alias = "MountPath")]
    pub mount_path: String,
}

impl Volume {
    pub fn new(host_path: impl Into<PathBuf>, mount_path: impl Into<String>) -> Self {
        Self {
            host_path: host_path.into(),
            mount_path: mount_path.into(),
        }
    }

    /// `host:mount` form used by `-v`.
    pub fn to_bind_spec(&self) -> String {
        format!("{}:{}", self.host_path.display(), self.mount_path)
    }
}

/// Declarative description of a workspace, as written in `cadeconfig.yaml`/`.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Already-built image to run. When unset, `containerfile` is built.
    #[serde(
        rename = "prebuilt",
        alias = "prebuilt_image",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub prebuilt_image: Option<String>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub containerfile: Option<PathBuf>,

    #[serde(
        rename = "context",
        alias = "build_context",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub build_context: Option<PathBuf>,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,

    /// In-container path bound to the workspace's host directory.
    pub workdir: String,

    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Mounted after the primary working-directory binding, in this order.
    #[serde(rename = "volumes", alias = "Volumes")]
    pub extra_volumes: Vec<Volume>,

    /// Where this configuration was loaded from.
    #[serde(skip)]
    pub source: Option<String>,
}

impl WorkspaceConfig {
    /// The configured build context, or the current directory.
    pub fn build_context_or_default(&self) -> PathBuf {
        self.build_context
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_CONTEXT))
    }

    /// Expands `~` in volume host paths and anchors relative ones at `base`.
    ///
    /// Bind mounts require absolute host paths. Empty paths are left empty
    /// so validation still rejects them.
    pub fn resolve_host_paths(&mut self, base: &Path) {
        for volume in &mut self.extra_volumes {
            if volume.host_path.as_os_str().is_empty() {
                continue;
            }
            let raw = volume.host_path.to_string_lossy().into_owned();
            let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
            volume.host_path = if expanded.is_absolute() {
                expanded
            } else {
                base.join(expanded)
            };
        }
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(T::from))
}
