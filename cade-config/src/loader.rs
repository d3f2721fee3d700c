// Standard library imports
use std::fs;
use std::path::Path;

// External crate imports
use tracing::debug;
use url::Url;

// Internal imports
use crate::config::WorkspaceConfig;
use cade_core::error::{CadeError, Result};

/// Serialization format of a workspace configuration, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detects the format of a path or URL from its extension.
    ///
    /// URL query strings and fragments are ignored.
    pub fn from_source(source: &str) -> Result<Self> {
        let path = if is_remote(source) {
            Url::parse(source)
                .map_err(|e| CadeError::Config(format!("Invalid configuration URL '{}': {}", source, e)))?
                .path()
                .to_string()
        } else {
            source.to_string()
        };

        let extension = Path::new(&path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(CadeError::Config(format!(
                "Unsupported config file type for '{}'. Must be one of JSON (.json) or YAML (.yaml)",
                source
            ))),
        }
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("https://") || source.starts_with("http://")
}

/// Loads a [`WorkspaceConfig`] from a local path or an HTTP(S) URL.
#[derive(Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Reads, parses and validates the configuration at `source`.
    ///
    /// The format is decided before any I/O so an unsupported extension
    /// fails without touching the filesystem or network.
    pub fn load(&self, source: &str) -> Result<WorkspaceConfig> {
        let format = ConfigFormat::from_source(source)?;
        let contents = self.read_source(source)?;

        let mut config = Self::parse(&contents, format, source)?;
        config.source = Some(source.to_string());

        let cwd = std::env::current_dir()?;
        config.resolve_host_paths(&cwd);
        config.validate()?;

        Ok(config)
    }

    /// Deserializes configuration text in the given format.
    pub fn parse(contents: &str, format: ConfigFormat, source: &str) -> Result<WorkspaceConfig> {
        match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| {
                CadeError::Config(format!("Failed to parse {} as JSON: {}", source, e))
            }),
            ConfigFormat::Yaml => serde_yaml_ng::from_str(contents).map_err(|e| {
                CadeError::Config(format!("Failed to parse {} as YAML: {}", source, e))
            }),
        }
    }

    fn read_source(&self, source: &str) -> Result<String> {
        if is_remote(source) {
            debug!("Fetching config from: {}", source);
            return Self::fetch(source);
        }

        debug!("Loading config from: {}", source);
        fs::read_to_string(source).map_err(|e| {
            CadeError::Config(format!("Failed to read the cade config at {}: {}", source, e))
        })
    }

    fn fetch(url: &str) -> Result<String> {
        let response = reqwest::blocking::get(url)
            .map_err(|e| CadeError::Network(format!("Failed to fetch {}: {}", url, e)))?
            .error_for_status()
            .map_err(|e| CadeError::Config(format!("Failed to fetch {}: {}", url, e)))?;

        response
            .text()
            .map_err(|e| CadeError::Network(format!("Failed to read response from {}: {}", url, e)))
    }
}

/// Parses the workspace configuration at `source` (local path or URL).
pub fn parse_workspace_config(source: &str) -> Result<WorkspaceConfig> {
    ConfigLoader::new().load(source)
}
