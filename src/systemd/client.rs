// Unit listing via `systemctl list-units`

use crate::error::Result;
use crate::systemd::{CommandRunner, ServiceRecord, ServiceStatus};

/// Arguments for a plain, script-friendly listing of every service unit
const LIST_UNITS_ARGS: &[&str] = &[
    "list-units",
    "--type=service",
    "--all",
    "--no-ask-password",
    "--no-legend",
    "--no-pager",
    "--plain",
];

/// Reads the service list from systemctl
#[derive(Debug, Clone)]
pub struct SystemdClient {
    runner: CommandRunner,
    systemctl: String,
}

impl SystemdClient {
    pub fn new(runner: CommandRunner, systemctl: impl Into<String>) -> Self {
        Self {
            runner,
            systemctl: systemctl.into(),
        }
    }

    /// List all service units known to systemd
    pub async fn list_services(&self) -> Result<Vec<ServiceRecord>> {
        let output = self.runner.output(&self.systemctl, LIST_UNITS_ARGS).await?;
        let services = parse_unit_list(&output);
        tracing::debug!("Parsed {} service units", services.len());
        Ok(services)
    }
}

/// Parse `list-units --plain --no-legend` output.
///
/// Each line is `UNIT LOAD ACTIVE SUB DESCRIPTION...`. Lines with fewer
/// than four fields are skipped.
pub fn parse_unit_list(output: &str) -> Vec<ServiceRecord> {
    output.lines().filter_map(parse_unit_line).collect()
}

fn parse_unit_line(line: &str) -> Option<ServiceRecord> {
    let mut fields: Vec<&str> = line.split_whitespace().collect();

    // Older systemd prints a status bullet even with --plain
    if matches!(fields.first(), Some(&"●") | Some(&"*")) {
        fields.remove(0);
    }

    if fields.len() < 4 {
        return None;
    }

    let status = ServiceStatus::from_states(fields[2], fields[3]);
    let description = fields[4..].join(" ");

    Some(ServiceRecord::new(fields[0], status, description))
}
