//! Disposable helper container used to extract files from an image.

use tracing::{debug, warn};

use super::DockerRuntime;
use crate::types::Container;
use cade_core::error::Result;

/// Prefix of helper container names. It differs from the workspace prefix,
/// so a helper can never take the name of a workspace container.
pub const HELPER_PREFIX: &str = "cade-copier-";

/// Name of the helper used to copy files out of `container`'s image.
pub fn helper_name(container_name: &str) -> String {
    format!("{}{}", HELPER_PREFIX, container_name)
}

/// A created (never started) container that is removed when it goes away.
///
/// Call [`HelperContainer::remove`] to surface removal errors. If the guard
/// is dropped without that, removal is still attempted and failures are
/// logged.
pub(crate) struct HelperContainer<'a> {
    runtime: &'a DockerRuntime,
    name: String,
    removed: bool,
}

impl<'a> HelperContainer<'a> {
    /// `docker create` a helper from `container.image`.
    pub(crate) fn create(runtime: &'a DockerRuntime, container: &Container) -> Result<Self> {
        let name = helper_name(&container.name);
        debug!("Creating helper container {} from {}", name, container.image);

        runtime
            .command()
            .arg("create")
            .arg("--name")
            .arg(&name)
            .arg(&container.image)
            .arg("/bin/sh")
            .execute()?;

        Ok(Self {
            runtime,
            name,
            removed: false,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn remove(mut self) -> Result<Vec<u8>> {
        self.removed = true;
        self.runtime.remove_by_name(&self.name)
    }
}

impl Drop for HelperContainer<'_> {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = self.runtime.remove_by_name(&self.name) {
            warn!("Failed to remove helper container {}: {}", self.name, e);
        }
    }
}
