// Docker runtime driver split into logical modules

pub mod command;
mod copy;
pub mod parse;

pub use command::DockerCommand;
pub use copy::{helper_name, HELPER_PREFIX};

// Standard library
use std::path::Path;

// External crates
use tracing::{debug, warn};

// Internal imports
use crate::types::{Container, ExecOptions, Image};
use crate::{ContainerRuntime, Volume};
use cade_core::command_stream::is_tool_installed;
use cade_core::error::{CadeError, Result};
use copy::HelperContainer;

const DOCKER: &str = "docker";

/// [`ContainerRuntime`] backed by the `docker` CLI.
#[derive(Debug, Clone)]
pub struct DockerRuntime {
    program: String,
}

impl DockerRuntime {
    pub fn new() -> Result<Self> {
        if !is_tool_installed(DOCKER) {
            return Err(CadeError::Dependency("Docker".into()));
        }
        Ok(Self::with_program(DOCKER))
    }

    /// Driver for a specific docker-compatible binary, without checking PATH.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub(crate) fn command(&self) -> DockerCommand {
        DockerCommand::new(&self.program)
    }

    pub(crate) fn remove_by_name(&self, name: &str) -> Result<Vec<u8>> {
        self.command().args(["container", "rm"]).arg(name).execute()
    }

    fn build_command(&self, containerfile: &Path, tag: &str, context: &Path) -> DockerCommand {
        self.command()
            .arg("build")
            .arg("-f")
            .arg(containerfile.to_string_lossy())
            .arg("-t")
            .arg(tag)
            .arg(context.to_string_lossy())
    }

    fn run_command(
        &self,
        container: &Container,
        volumes: &[Volume],
        extra_args: &[String],
    ) -> DockerCommand {
        let mut cmd = self
            .command()
            .args(["run", "-d", "-t", "--name"])
            .arg(&container.name)
            .option("--network", container.network.as_deref());

        for volume in volumes {
            cmd = cmd.arg("-v").arg(volume.to_bind_spec());
        }

        cmd.arg(&container.image).args(extra_args.iter().cloned())
    }

    fn exec_command(
        &self,
        options: &ExecOptions,
        container_name: &str,
        command: &[String],
    ) -> DockerCommand {
        self.command()
            .arg("exec")
            .flag_if(options.detached, "-d")
            .flag_if(options.interactive, "-i")
            .flag_if(options.tty, "-t")
            .option("-u", options.user.as_deref())
            .option("-w", options.workdir.as_deref())
            .arg(container_name)
            .args(command.iter().cloned())
    }

    fn copy_command(&self, helper: &str, volume: &Volume) -> DockerCommand {
        // `<dir>/.` copies the directory's contents rather than the directory.
        let source = format!("{}:{}/.", helper, volume.mount_path.trim_end_matches('/'));
        self.command()
            .arg("cp")
            .arg(source)
            .arg(volume.host_path.to_string_lossy())
    }
}

impl ContainerRuntime for DockerRuntime {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn build(&self, containerfile: &Path, tag: &str, context: &Path) -> Result<Vec<u8>> {
        self.build_command(containerfile, tag, context).execute()
    }

    fn run(
        &self,
        container: &Container,
        volumes: &[Volume],
        extra_args: &[String],
    ) -> Result<Vec<u8>> {
        self.run_command(container, volumes, extra_args).execute()
    }

    fn exec(&self, options: &ExecOptions, container_name: &str, command: &[String]) -> Result<()> {
        self.exec_command(options, container_name, command)
            .execute_interactive()
    }

    fn container_list(&self) -> Result<Vec<Container>> {
        let output = self
            .command()
            .args(["container", "list", "--all", "--format", "{{json .}}"])
            .execute()?;
        parse::parse_container_list(&output)
    }

    fn image_list(&self) -> Result<Vec<Image>> {
        let output = self
            .command()
            .args(["image", "list", "--format", "{{json .}}"])
            .execute()?;
        parse::parse_image_list(&output)
    }

    fn stop_container(&self, container: &Container) -> Result<Vec<u8>> {
        self.command()
            .args(["container", "stop"])
            .arg(&container.name)
            .execute()
    }

    fn remove_container(&self, container: &Container) -> Result<Vec<u8>> {
        self.remove_by_name(&container.name)
    }

    fn copy_to_host(&self, container: &Container, volume: &Volume) -> Result<Vec<u8>> {
        let helper = HelperContainer::create(self, container)?;
        let helper_name = helper.name().to_string();
        debug!(
            "Copying {}:{} to {}",
            helper_name,
            volume.mount_path,
            volume.host_path.display()
        );

        let copied = self.copy_command(&helper_name, volume).execute();
        let removed = helper.remove();

        match (copied, removed) {
            (Ok(output), Ok(_)) => Ok(output),
            (Ok(_), Err(remove_err)) => Err(remove_err),
            (Err(copy_err), Ok(_)) => Err(copy_err),
            (Err(copy_err), Err(remove_err)) => {
                warn!(
                    "Failed to remove helper container {} after copy failure: {}",
                    helper_name, remove_err
                );
                Err(copy_err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn runtime() -> DockerRuntime {
        DockerRuntime::with_program("docker")
    }

    #[test]
    fn test_build_arguments() {
        let cmd = runtime().build_command(
            Path::new("Containerfile"),
            "cade-test",
            Path::new("."),
        );
        assert_eq!(
            cmd.arguments(),
            ["build", "-f", "Containerfile", "-t", "cade-test", "."]
        );
    }

    #[test]
    fn test_run_arguments_keep_volume_order() {
        let container = Container::new("cade-workspace-demo", "demo")
            .with_network(Some("devnet".to_string()));
        let volumes = vec![
            Volume::new("/home/u/.cade/tmp/demo", "/workspace"),
            Volume::new("/h1", "/m1"),
            Volume::new("/h2", "/m2"),
        ];
        let cmd = runtime().run_command(&container, &volumes, &["sleep".into(), "infinity".into()]);
        assert_eq!(
            cmd.arguments(),
            [
                "run",
                "-d",
                "-t",
                "--name",
                "cade-workspace-demo",
                "--network",
                "devnet",
                "-v",
                "/home/u/.cade/tmp/demo:/workspace",
                "-v",
                "/h1:/m1",
                "-v",
                "/h2:/m2",
                "demo",
                "sleep",
                "infinity",
            ]
        );
    }

    #[test]
    fn test_run_arguments_without_network() {
        let container = Container::new("cade-workspace-demo", "demo");
        let cmd = runtime().run_command(&container, &[], &[]);
        assert_eq!(
            cmd.arguments(),
            ["run", "-d", "-t", "--name", "cade-workspace-demo", "demo"]
        );
    }

    #[test]
    fn test_exec_arguments_follow_options() {
        let options = ExecOptions {
            detached: false,
            interactive: true,
            tty: true,
            user: Some("dev".to_string()),
            workdir: Some("/workspace".to_string()),
        };
        let cmd = runtime().exec_command(&options, "cade-workspace-demo", &["/bin/bash".into()]);
        assert_eq!(
            cmd.arguments(),
            [
                "exec",
                "-i",
                "-t",
                "-u",
                "dev",
                "-w",
                "/workspace",
                "cade-workspace-demo",
                "/bin/bash"
            ]
        );

        let detached = ExecOptions {
            detached: true,
            ..Default::default()
        };
        let cmd = runtime().exec_command(&detached, "c", &["true".into()]);
        assert_eq!(cmd.arguments(), ["exec", "-d", "c", "true"]);
    }

    #[test]
    fn test_copy_arguments_copy_directory_contents() {
        let volume = Volume::new(PathBuf::from("/home/u/.cade/tmp/demo"), "/workspace/");
        let cmd = runtime().copy_command("cade-copier-cade-workspace-demo", &volume);
        assert_eq!(
            cmd.arguments(),
            [
                "cp",
                "cade-copier-cade-workspace-demo:/workspace/.",
                "/home/u/.cade/tmp/demo"
            ]
        );
    }

    #[cfg(unix)]
    mod with_fake_binary {
        use super::*;
        use serial_test::serial;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        /// Writes a shell script standing in for `docker` that logs its
        /// arguments and fails for the subcommands listed in `failing`.
        fn fake_docker(dir: &TempDir, failing: &[&str]) -> (DockerRuntime, PathBuf) {
            let log = dir.path().join("calls.log");
            let script = dir.path().join("docker");
            let mut body = format!(
                "#!/bin/sh\necho \"$*\" >> '{}'\ncase \"$1\" in\n",
                log.display()
            );
            for sub in failing {
                body.push_str(&format!("  {sub}) echo \"{sub} exploded\"; exit 1;;\n"));
            }
            body.push_str("esac\nexit 0\n");
            fs::write(&script, body).unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
            (
                DockerRuntime::with_program(script.to_string_lossy()),
                log,
            )
        }

        fn logged_calls(log: &Path) -> Vec<String> {
            fs::read_to_string(log)
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }

        #[test]
        #[serial]
        fn test_copy_removes_helper_on_success() {
            let dir = TempDir::new().unwrap();
            let (runtime, log) = fake_docker(&dir, &[]);
            let container = Container::new("cade-workspace-demo", "demo");
            let volume = Volume::new("/tmp/out", "/workspace");

            runtime.copy_to_host(&container, &volume).unwrap();

            let calls = logged_calls(&log);
            assert_eq!(calls.len(), 3);
            assert!(calls[0].starts_with("create --name cade-copier-cade-workspace-demo demo"));
            assert!(calls[1].starts_with("cp cade-copier-cade-workspace-demo:/workspace/."));
            assert_eq!(calls[2], "container rm cade-copier-cade-workspace-demo");
        }

        #[test]
        #[serial]
        fn test_copy_removes_helper_when_copy_fails() {
            let dir = TempDir::new().unwrap();
            let (runtime, log) = fake_docker(&dir, &["cp"]);
            let container = Container::new("cade-workspace-demo", "demo");
            let volume = Volume::new("/tmp/out", "/workspace");

            let err = runtime.copy_to_host(&container, &volume).unwrap_err();
            assert_eq!(err.output(), Some("cp exploded"));

            let calls = logged_calls(&log);
            assert_eq!(calls.last().map(String::as_str), Some("container rm cade-copier-cade-workspace-demo"));
        }

        #[test]
        #[serial]
        fn test_copy_surfaces_helper_removal_failure() {
            let dir = TempDir::new().unwrap();
            let (runtime, _log) = fake_docker(&dir, &["container"]);
            let container = Container::new("cade-workspace-demo", "demo");
            let volume = Volume::new("/tmp/out", "/workspace");

            let err = runtime.copy_to_host(&container, &volume).unwrap_err();
            assert!(err.to_string().starts_with("docker container rm failed"));
        }

        #[test]
        #[serial]
        fn test_create_failure_skips_copy() {
            let dir = TempDir::new().unwrap();
            let (runtime, log) = fake_docker(&dir, &["create"]);
            let container = Container::new("cade-workspace-demo", "demo");
            let volume = Volume::new("/tmp/out", "/workspace");

            assert!(runtime.copy_to_host(&container, &volume).is_err());
            assert_eq!(logged_calls(&log).len(), 1);
        }

        #[test]
        #[serial]
        fn test_stop_missing_container_is_error() {
            let dir = TempDir::new().unwrap();
            let (runtime, _log) = fake_docker(&dir, &["container"]);
            let err = runtime
                .stop_container(&Container::named("cade-workspace-gone"))
                .unwrap_err();
            assert_eq!(err.output(), Some("container exploded"));
        }
    }
}
