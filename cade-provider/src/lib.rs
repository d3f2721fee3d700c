//! Container runtime abstraction for cade.
//!
//! Workspace orchestration talks to the container runtime only through the
//! [`ContainerRuntime`] trait. One concrete driver exists (Docker); the
//! `test-helpers` feature adds an in-memory [`mock::MockRuntime`] that
//! records calls and replays scripted failures.

// Standard library
use std::path::Path;

// External crates
use cade_core::error::Result;

// Re-export common types for convenience
pub use cade_config::Volume;
pub use cade_core::error::{CadeError, Result as CadeResult};
pub use types::{Container, ExecOptions, Image};

pub mod types;

#[cfg(feature = "docker")]
pub mod docker;

// When the `test-helpers` feature is enabled, include the mock runtime.
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

/// The capability contract for container-runtime operations.
///
/// Operations that return `Vec<u8>` hand back the runtime's combined
/// output on success. On failure the output travels inside
/// [`CadeError::Runtime`]. Nothing here is idempotent: stopping or removing
/// a container that does not exist is an error.
pub trait ContainerRuntime {
    /// Get the name of the runtime (e.g., "docker").
    fn name(&self) -> &'static str;

    /// Build `containerfile` in `context` and tag the result as `tag`.
    fn build(&self, containerfile: &Path, tag: &str, context: &Path) -> Result<Vec<u8>>;

    /// Start a detached container with a TTY and the given bindings.
    ///
    /// Fails if a container with the same name already exists.
    fn run(&self, container: &Container, volumes: &[Volume], extra_args: &[String])
        -> Result<Vec<u8>>;

    /// Attach to `container_name` and run `command` with the caller's stdio.
    ///
    /// Blocks until the session ends.
    fn exec(&self, options: &ExecOptions, container_name: &str, command: &[String]) -> Result<()>;

    /// All containers known to the runtime, in the runtime's order.
    fn container_list(&self) -> Result<Vec<Container>>;

    /// All images known to the runtime.
    fn image_list(&self) -> Result<Vec<Image>>;

    fn stop_container(&self, container: &Container) -> Result<Vec<u8>>;

    fn remove_container(&self, container: &Container) -> Result<Vec<u8>>;

    /// Copy the contents of `volume.mount_path` from `container.image` into
    /// `volume.host_path`.
    ///
    /// Works from a disposable helper container, so the workspace container
    /// does not need to exist. The helper is removed on every exit path.
    fn copy_to_host(&self, container: &Container, volume: &Volume) -> Result<Vec<u8>>;
}

/// Creates the container runtime driver.
///
/// There is exactly one driver; no discovery takes place.
pub fn get_runtime() -> Result<Box<dyn ContainerRuntime>> {
    #[cfg(feature = "docker")]
    {
        Ok(Box::new(docker::DockerRuntime::new()?))
    }

    #[cfg(not(feature = "docker"))]
    {
        Err(CadeError::Dependency(
            "no container runtime driver compiled in".to_string(),
        ))
    }
}
