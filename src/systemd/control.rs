// Service control operations via systemctl

use crate::error::Result;
use crate::systemd::{CommandRunner, ServiceAction};

/// Issues start/stop/restart commands, elevating through sudo when needed
#[derive(Debug, Clone)]
pub struct ServiceController {
    runner: CommandRunner,
    systemctl: String,
    use_sudo: bool,
}

impl ServiceController {
    pub fn new(runner: CommandRunner, systemctl: impl Into<String>, use_sudo: bool) -> Self {
        Self {
            runner,
            systemctl: systemctl.into(),
            use_sudo,
        }
    }

    /// Check whether the process already has root privileges.
    /// Reads the environment so no libc dependency is needed.
    pub(crate) fn running_as_root() -> bool {
        std::env::var("USER").unwrap_or_default() == "root"
            || std::env::var("EUID").unwrap_or_default() == "0"
    }

    /// Program and arguments for an action, with `sudo -n` prepended when
    /// elevation is enabled and we are not root.
    pub(crate) fn command_for<'a>(
        &'a self,
        service_name: &'a str,
        action: ServiceAction,
    ) -> (&'a str, Vec<&'a str>) {
        if self.use_sudo && !Self::running_as_root() {
            (
                "sudo",
                vec!["-n", self.systemctl.as_str(), action.as_str(), service_name],
            )
        } else {
            (self.systemctl.as_str(), vec![action.as_str(), service_name])
        }
    }

    /// Apply `action` to a unit. Returns the success message.
    pub async fn apply(&self, service_name: &str, action: ServiceAction) -> Result<String> {
        let (program, args) = self.command_for(service_name, action);
        self.runner.output(program, &args).await?;

        tracing::info!("Service {} {}", service_name, action.past_tense());
        Ok(format!(
            "Service {} {} successfully",
            service_name,
            action.past_tense()
        ))
    }
}
