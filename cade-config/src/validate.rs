use crate::config::WorkspaceConfig;
use cade_core::error::{CadeError, Result};

/// Checks a loaded configuration before anything touches the runtime.
///
/// The workspace name is not checked here: it may still be overridden on
/// the command line.
pub struct ConfigValidator<'a> {
    config: &'a WorkspaceConfig,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(config: &'a WorkspaceConfig) -> Self {
        Self { config }
    }

    /// Runs every check and reports all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        self.validate_workdir(&mut problems);
        self.validate_image_source(&mut problems);
        self.validate_volumes(&mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CadeError::Config(problems.join("; ")))
        }
    }

    fn validate_workdir(&self, problems: &mut Vec<String>) {
        let workdir = self.config.workdir.trim();
        if workdir.is_empty() {
            problems.push("Missing required field: workdir".to_string());
        } else if !workdir.starts_with('/') {
            problems.push(format!(
                "workdir must be an absolute container path, got '{}'",
                workdir
            ));
        }
    }

    fn validate_image_source(&self, problems: &mut Vec<String>) {
        if self.config.prebuilt_image.is_none() && self.config.containerfile.is_none() {
            problems.push("One of 'prebuilt' or 'containerfile' must be set".to_string());
        }
    }

    fn validate_volumes(&self, problems: &mut Vec<String>) {
        for (index, volume) in self.config.extra_volumes.iter().enumerate() {
            if volume.host_path.as_os_str().is_empty() {
                problems.push(format!("volumes[{}]: host_path is empty", index));
            }
            if volume.mount_path.trim().is_empty() {
                problems.push(format!("volumes[{}]: mount_path is empty", index));
            } else if !volume.mount_path.starts_with('/') {
                problems.push(format!(
                    "volumes[{}]: mount_path must be absolute, got '{}'",
                    index, volume.mount_path
                ));
            }
        }
    }
}

impl WorkspaceConfig {
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::new(self).validate()
    }
}
