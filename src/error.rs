// Error types for svcpanel

use std::time::Duration;
use thiserror::Error;

/// Result type alias using anyhow::Error
pub type Result<T> = anyhow::Result<T>;

/// Svcpanel-specific error types
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Invalid action")]
    InvalidAction { action: String },

    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: &'static str },

    /// Text captured from a command that exited unsuccessfully
    #[error("{0}")]
    CommandFailed(String),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
