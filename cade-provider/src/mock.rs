//! In-memory [`ContainerRuntime`] for tests.
//!
//! Every call is recorded. The mock keeps a small model of runtime state
//! (containers and images) so that it fails the same way a real runtime
//! does: running a name twice conflicts, stopping or removing an unknown
//! container errors. Any operation can also be scripted to fail.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Container, ExecOptions, Image};
use crate::{ContainerRuntime, Volume};
use cade_core::error::{CadeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Build,
    Run,
    Exec,
    ContainerList,
    ImageList,
    Stop,
    Remove,
    CopyToHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCall {
    Build {
        containerfile: PathBuf,
        tag: String,
        context: PathBuf,
    },
    Run {
        container: Container,
        volumes: Vec<Volume>,
        extra_args: Vec<String>,
    },
    Exec {
        options: ExecOptions,
        container_name: String,
        command: Vec<String>,
    },
    ContainerList,
    ImageList,
    Stop {
        name: String,
    },
    Remove {
        name: String,
    },
    CopyToHost {
        container: Container,
        volume: Volume,
    },
}

impl RuntimeCall {
    pub fn operation(&self) -> Operation {
        match self {
            RuntimeCall::Build { .. } => Operation::Build,
            RuntimeCall::Run { .. } => Operation::Run,
            RuntimeCall::Exec { .. } => Operation::Exec,
            RuntimeCall::ContainerList => Operation::ContainerList,
            RuntimeCall::ImageList => Operation::ImageList,
            RuntimeCall::Stop { .. } => Operation::Stop,
            RuntimeCall::Remove { .. } => Operation::Remove,
            RuntimeCall::CopyToHost { .. } => Operation::CopyToHost,
        }
    }
}

#[derive(Debug, Default)]
pub struct MockRuntime {
    calls: RefCell<Vec<RuntimeCall>>,
    failures: RefCell<HashMap<Operation, String>>,
    containers: RefCell<Vec<Container>>,
    images: RefCell<Vec<Image>>,
    seed_files: Vec<(String, String)>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the runtime with existing containers, in listing order.
    pub fn with_containers(self, containers: Vec<Container>) -> Self {
        *self.containers.borrow_mut() = containers;
        self
    }

    pub fn with_images(self, images: Vec<Image>) -> Self {
        *self.images.borrow_mut() = images;
        self
    }

    /// Files that `copy_to_host` writes into the host directory, standing in
    /// for the image's working-directory contents.
    pub fn with_seed_file(mut self, name: &str, contents: &str) -> Self {
        self.seed_files.push((name.to_string(), contents.to_string()));
        self
    }

    /// Make every later call of `operation` fail with `output` as the
    /// runtime's diagnostic output.
    pub fn fail_on(&self, operation: Operation, output: &str) {
        self.failures
            .borrow_mut()
            .insert(operation, output.to_string());
    }

    pub fn clear_failure(&self, operation: Operation) {
        self.failures.borrow_mut().remove(&operation);
    }

    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls.borrow().clone()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.calls.borrow().iter().map(RuntimeCall::operation).collect()
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    pub fn container_names(&self) -> Vec<String> {
        self.containers
            .borrow()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    fn record(&self, call: RuntimeCall) -> Result<()> {
        let operation = call.operation();
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(&operation) {
            Some(output) => Err(CadeError::runtime(
                format!("mock {:?}", operation),
                "scripted failure",
                output.as_bytes(),
            )),
            None => Ok(()),
        }
    }

    fn seed(&self, host_path: &Path) -> Result<()> {
        fs::create_dir_all(host_path)?;
        for (name, contents) in &self.seed_files {
            fs::write(host_path.join(name), contents)?;
        }
        Ok(())
    }
}

impl ContainerRuntime for MockRuntime {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn build(&self, containerfile: &Path, tag: &str, context: &Path) -> Result<Vec<u8>> {
        self.record(RuntimeCall::Build {
            containerfile: containerfile.to_path_buf(),
            tag: tag.to_string(),
            context: context.to_path_buf(),
        })?;
        self.images.borrow_mut().push(Image {
            repository: tag.to_string(),
            tag: "latest".to_string(),
            ..Default::default()
        });
        Ok(format!("Successfully tagged {}:latest\n", tag).into_bytes())
    }

    fn run(
        &self,
        container: &Container,
        volumes: &[Volume],
        extra_args: &[String],
    ) -> Result<Vec<u8>> {
        self.record(RuntimeCall::Run {
            container: container.clone(),
            volumes: volumes.to_vec(),
            extra_args: extra_args.to_vec(),
        })?;

        if self.containers.borrow().iter().any(|c| c.name == container.name) {
            return Err(CadeError::runtime(
                "mock Run",
                "exit status 125",
                format!(
                    "Conflict. The container name \"/{}\" is already in use",
                    container.name
                )
                .as_bytes(),
            ));
        }

        let mut running = container.clone();
        running.state = "running".to_string();
        self.containers.borrow_mut().push(running);
        Ok(format!("{}\n", container.name).into_bytes())
    }

    fn exec(&self, options: &ExecOptions, container_name: &str, command: &[String]) -> Result<()> {
        self.record(RuntimeCall::Exec {
            options: options.clone(),
            container_name: container_name.to_string(),
            command: command.to_vec(),
        })?;

        let running = self
            .containers
            .borrow()
            .iter()
            .any(|c| c.name == container_name && c.state == "running");
        if running {
            Ok(())
        } else {
            Err(CadeError::runtime(
                "mock Exec",
                "exit status 1",
                format!("Error: No such container: {}", container_name).as_bytes(),
            ))
        }
    }

    fn container_list(&self) -> Result<Vec<Container>> {
        self.record(RuntimeCall::ContainerList)?;
        Ok(self.containers.borrow().clone())
    }

    fn image_list(&self) -> Result<Vec<Image>> {
        self.record(RuntimeCall::ImageList)?;
        Ok(self.images.borrow().clone())
    }

    fn stop_container(&self, container: &Container) -> Result<Vec<u8>> {
        self.record(RuntimeCall::Stop {
            name: container.name.clone(),
        })?;

        let mut containers = self.containers.borrow_mut();
        match containers.iter_mut().find(|c| c.name == container.name) {
            Some(found) => {
                found.state = "exited".to_string();
                Ok(format!("{}\n", container.name).into_bytes())
            }
            None => Err(CadeError::runtime(
                "mock Stop",
                "exit status 1",
                format!("Error response from daemon: No such container: {}", container.name)
                    .as_bytes(),
            )),
        }
    }

    fn remove_container(&self, container: &Container) -> Result<Vec<u8>> {
        self.record(RuntimeCall::Remove {
            name: container.name.clone(),
        })?;

        let mut containers = self.containers.borrow_mut();
        let before = containers.len();
        containers.retain(|c| c.name != container.name);
        if containers.len() < before {
            Ok(format!("{}\n", container.name).into_bytes())
        } else {
            Err(CadeError::runtime(
                "mock Remove",
                "exit status 1",
                format!("Error response from daemon: No such container: {}", container.name)
                    .as_bytes(),
            ))
        }
    }

    fn copy_to_host(&self, container: &Container, volume: &Volume) -> Result<Vec<u8>> {
        self.record(RuntimeCall::CopyToHost {
            container: container.clone(),
            volume: volume.clone(),
        })?;
        self.seed(&volume.host_path)?;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mock = MockRuntime::new();
        mock.build(Path::new("Containerfile"), "demo", Path::new("."))
            .unwrap();
        mock.run(&Container::new("cade-workspace-demo", "demo"), &[], &[])
            .unwrap();
        mock.container_list().unwrap();

        assert_eq!(
            mock.operations(),
            vec![Operation::Build, Operation::Run, Operation::ContainerList]
        );
    }

    #[test]
    fn test_run_conflicts_on_existing_name() {
        let mock = MockRuntime::new();
        let container = Container::new("cade-workspace-demo", "demo");
        mock.run(&container, &[], &[]).unwrap();
        let err = mock.run(&container, &[], &[]).unwrap_err();
        assert!(err.output().unwrap().contains("already in use"));
    }

    #[test]
    fn test_stop_and_remove_are_not_idempotent() {
        let mock = MockRuntime::new().with_containers(vec![Container::named("a")]);
        mock.stop_container(&Container::named("a")).unwrap();
        mock.remove_container(&Container::named("a")).unwrap();
        assert!(mock.stop_container(&Container::named("a")).is_err());
        assert!(mock.remove_container(&Container::named("a")).is_err());
    }

    #[test]
    fn test_scripted_failure_carries_output() {
        let mock = MockRuntime::new();
        mock.fail_on(Operation::Build, "no such file: Containerfile");
        let err = mock
            .build(Path::new("Containerfile"), "demo", Path::new("."))
            .unwrap_err();
        assert_eq!(err.output(), Some("no such file: Containerfile"));
        assert_eq!(mock.count(Operation::Build), 1);

        mock.clear_failure(Operation::Build);
        assert!(mock
            .build(Path::new("Containerfile"), "demo", Path::new("."))
            .is_ok());
    }

    #[test]
    fn test_copy_to_host_seeds_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("demo");
        let mock = MockRuntime::new().with_seed_file("README.md", "hello");

        mock.copy_to_host(
            &Container::new("cade-workspace-demo", "demo"),
            &Volume::new(&target, "/workspace"),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(target.join("README.md")).unwrap(), "hello");
    }
}
