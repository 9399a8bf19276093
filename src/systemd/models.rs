// Service data models

use crate::error::PanelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name given to the synthetic record returned when listing fails
pub const LIST_ERROR_RECORD_NAME: &str = "list-units";

/// Dashboard-level status derived from systemd's active/sub states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Running,
    Stopped,
    Failed,
    Exited,
    Unknown,
}

impl ServiceStatus {
    /// Map systemd's (active, sub) pair onto a dashboard status.
    ///
    /// Rules are checked in order: active+running, failed, exited, and
    /// everything else counts as stopped.
    pub fn from_states(active_state: &str, sub_state: &str) -> Self {
        if active_state == "active" && sub_state == "running" {
            ServiceStatus::Running
        } else if active_state == "failed" {
            ServiceStatus::Failed
        } else if sub_state == "exited" {
            ServiceStatus::Exited
        } else {
            ServiceStatus::Stopped
        }
    }
}

/// One service as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    pub status: ServiceStatus,
    pub description: String,
    /// Set only on the synthetic record that reports a listing failure
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl ServiceRecord {
    pub fn new(
        name: impl Into<String>,
        status: ServiceStatus,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            description: description.into(),
            error: false,
        }
    }

    /// Placeholder record carrying the reason the unit list could not be read
    pub fn listing_error(message: impl Into<String>) -> Self {
        Self {
            name: LIST_ERROR_RECORD_NAME.to_string(),
            status: ServiceStatus::Failed,
            description: message.into(),
            error: true,
        }
    }
}

/// Host resource usage sampled at request time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub cpu_percent: f64,
    pub ram_percent: f64,
    /// Unix timestamp (seconds)
    pub boot_time: u64,
}

/// Outcome of a start/stop/restart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlResult {
    pub success: bool,
    pub message: String,
}

impl ControlResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Control actions accepted by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
}

impl ServiceAction {
    /// systemctl verb for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Restart => "restart",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ServiceAction::Start => "started",
            ServiceAction::Stop => "stopped",
            ServiceAction::Restart => "restarted",
        }
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceAction {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(ServiceAction::Start),
            "stop" => Ok(ServiceAction::Stop),
            "restart" => Ok(ServiceAction::Restart),
            other => Err(PanelError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }
}

/// Reject names that are empty, oversized, or could be parsed as a flag
/// by systemctl/journalctl.
pub fn validate_service_name(name: &str) -> Result<(), PanelError> {
    let invalid = |reason| PanelError::InvalidServiceName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.len() > 256 {
        return Err(invalid("name is longer than 256 bytes"));
    }
    if name.contains('\0') || name.contains("..") {
        return Err(invalid("name contains a forbidden sequence"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(invalid("name cannot contain whitespace"));
    }
    if name.starts_with('-') {
        return Err(invalid("name cannot start with '-'"));
    }

    Ok(())
}
