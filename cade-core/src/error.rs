use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadeError {
    Config(String),
    /// A container runtime command exited unsuccessfully.
    ///
    /// `output` holds the runtime's combined stdout/stderr so the raw
    /// diagnostics reach the user alongside the error.
    Runtime {
        operation: String,
        message: String,
        output: String,
    },
    Io(#[from] std::io::Error),
    Filesystem(String),
    Dependency(String),
    Serialization(String),
    Network(String),
    DockerNotRunning,
    DockerPermission,
    Internal(String),
}

impl CadeError {
    /// Builds a [`CadeError::Runtime`] from raw command output.
    pub fn runtime(
        operation: impl Into<String>,
        message: impl Into<String>,
        output: &[u8],
    ) -> Self {
        CadeError::Runtime {
            operation: operation.into(),
            message: message.into(),
            output: String::from_utf8_lossy(output).trim_end().to_string(),
        }
    }

    /// Raw runtime output attached to this error, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            CadeError::Runtime { output, .. } if !output.is_empty() => Some(output),
            _ => None,
        }
    }
}

impl Display for CadeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CadeError::Config(s) => write!(f, "Configuration error: {}", s),
            CadeError::Runtime {
                operation,
                message,
                output,
            } => {
                write!(f, "{} failed: {}", operation, message)?;
                if !output.is_empty() {
                    write!(f, " | out: {}", output)?;
                }
                Ok(())
            }
            CadeError::Io(e) => write!(f, "I/O error: {}", e),
            CadeError::Filesystem(s) => write!(f, "Filesystem error: {}", s),
            CadeError::Dependency(s) => write!(f, "Dependency not found: {}", s),
            CadeError::Serialization(s) => write!(f, "Serialization error: {}", s),
            CadeError::Network(s) => write!(f, "Network error: {}", s),
            CadeError::DockerNotRunning => {
                write!(f, "Docker daemon is not running\n\n")?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Start Docker Desktop, or\n")?;
                write!(f, "  • Run: sudo systemctl start docker\n")?;
                write!(f, "  • Verify: docker ps")
            }
            CadeError::DockerPermission => {
                write!(f, "Permission denied accessing Docker\n\n")?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Add user to docker group: sudo usermod -aG docker $USER\n")?;
                write!(f, "  • Log out and back in")
            }
            CadeError::Internal(s) => write!(f, "Internal error: {}", s),
        }
    }
}

impl From<serde_yaml_ng::Error> for CadeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        CadeError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CadeError {
    fn from(err: serde_json::Error) -> Self {
        CadeError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CadeError>;
