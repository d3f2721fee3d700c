use std::fs;

use cade_config::WorkspaceConfig;
use cade_core::{cade_info, cade_progress, cade_warning, CadeError};
use cade_messages::{msg, MESSAGES};
use cade_provider::{Container, Volume};
use tracing::{debug, info, instrument};

use crate::error::{OrchestratorError, Result};
use crate::naming::WorkspaceName;
use crate::options::{ProvisionReport, UpOptions};
use crate::WorkspaceOrchestrator;

impl WorkspaceOrchestrator<'_> {
    /// Provision a workspace: resolve or build the image, seed the host
    /// working directory on first use, then start the container.
    #[instrument(skip_all, fields(source = ?config.source))]
    pub fn up(&self, config: &WorkspaceConfig, options: &UpOptions) -> Result<ProvisionReport> {
        let workspace = resolve_workspace_name(config, options)?;
        cade_progress!("{}", msg!(MESSAGES.up_creating, name = workspace.as_str()));

        let (image, built) = self.resolve_image(&workspace, config, options)?;

        let container_name = workspace.container_name();
        let workdir = self.store().workdir_for(&workspace);

        let base = self.store().base();
        cade_progress!(
            "{}",
            msg!(MESSAGES.up_preparing_storage, path = base.display().to_string())
        );
        fs::create_dir_all(base).map_err(|e| OrchestratorError::Storage {
            path: base.to_path_buf(),
            source: e.into(),
        })?;

        let container = Container::new(&container_name, &image).with_network(config.network.clone());
        let primary = Volume::new(&workdir, &config.workdir);

        let seeded = if workdir.exists() {
            cade_info!(
                "{}",
                msg!(MESSAGES.up_reusing_workdir, workdir = workdir.display().to_string())
            );
            false
        } else {
            self.seed_workdir(&container, &primary)?;
            true
        };

        let mut volumes = Vec::with_capacity(config.extra_volumes.len() + 1);
        volumes.push(primary);
        volumes.extend(config.extra_volumes.iter().cloned());

        cade_progress!("{}", msg!(MESSAGES.up_running, container = container_name.as_str()));
        let output = self
            .runtime()
            .run(&container, &volumes, &[])
            .map_err(|source| OrchestratorError::Run {
                container: container_name.clone(),
                source,
            })?;
        debug!("run output: {}", String::from_utf8_lossy(&output).trim_end());
        info!(workspace = %workspace, image = %image, "workspace container started");

        Ok(ProvisionReport {
            workspace: workspace.to_string(),
            container_name,
            image,
            workdir,
            built,
            seeded,
        })
    }

    /// Returns the image to run and whether it was built by this call.
    fn resolve_image(
        &self,
        workspace: &WorkspaceName,
        config: &WorkspaceConfig,
        options: &UpOptions,
    ) -> Result<(String, bool)> {
        if let (Some(prebuilt), false) = (&config.prebuilt_image, options.force_build) {
            cade_info!("{}", msg!(MESSAGES.up_using_image, image = prebuilt.as_str()));
            return Ok((prebuilt.clone(), false));
        }

        let tag = workspace.to_string();
        let containerfile = config.containerfile.as_ref().ok_or_else(|| {
            OrchestratorError::Config(format!(
                "workspace '{}' has no containerfile to build from",
                workspace
            ))
        })?;
        let context = options
            .context
            .clone()
            .unwrap_or_else(|| config.build_context_or_default());

        let template = if config.prebuilt_image.is_some() {
            MESSAGES.up_rebuilding
        } else {
            MESSAGES.up_building
        };
        cade_progress!("{}", msg!(template, tag = tag.as_str()));
        debug!(
            "Building {} with context {}",
            containerfile.display(),
            context.display()
        );

        let output = self
            .runtime()
            .build(containerfile, &tag, &context)
            .map_err(|source| OrchestratorError::Build {
                tag: tag.clone(),
                source,
            })?;
        debug!("build output: {}", String::from_utf8_lossy(&output).trim_end());

        Ok((tag, true))
    }

    /// Copies the image's working directory out to the host. Runs only when
    /// the host directory does not exist yet.
    fn seed_workdir(&self, container: &Container, primary: &Volume) -> Result<()> {
        let path = primary.host_path.clone();
        cade_progress!(
            "{}",
            msg!(
                MESSAGES.up_seeding,
                workdir = path.display().to_string(),
                mount = primary.mount_path.as_str()
            )
        );

        let seed_error = |source: CadeError| OrchestratorError::Seed {
            path: path.clone(),
            source,
        };

        self.runtime()
            .copy_to_host(container, primary)
            .map_err(seed_error)?;

        // An empty image workdir copies nothing; the bind mount still needs
        // a directory owned by the user.
        if !path.exists() {
            fs::create_dir_all(&path).map_err(|e| seed_error(e.into()))?;
        }
        let empty = fs::read_dir(&path)
            .map_err(|e| seed_error(e.into()))?
            .next()
            .is_none();
        if empty {
            cade_warning!(
                "{}",
                msg!(MESSAGES.up_empty_workdir, mount = primary.mount_path.as_str())
            );
        }
        Ok(())
    }
}

fn resolve_workspace_name(config: &WorkspaceConfig, options: &UpOptions) -> Result<WorkspaceName> {
    let raw = options
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or(config.workspace_name.as_deref())
        .ok_or_else(|| {
            OrchestratorError::Config(
                "no workspace name: set workspace_name in the configuration or pass --name"
                    .to_string(),
            )
        })?;
    WorkspaceName::parse(raw)
}
