// Service manager backends

use crate::config::Config;
use crate::error::Result;
use crate::systemd::{
    CommandRunner, JournalReader, ServiceAction, ServiceController, ServiceRecord, SystemdClient,
};
use async_trait::async_trait;

/// Capability the panel needs from a service manager.
///
/// Implementations report failures as errors; deciding which failures are
/// shown to the user as data is left to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServicePlatform: Send + Sync {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>>;

    async fn service_logs(&self, service_name: &str, lines: usize) -> Result<String>;

    /// Apply `action` and return a human-readable success message
    async fn control_service(&self, service_name: &str, action: ServiceAction) -> Result<String>;
}

/// Drives the host's systemd through systemctl and journalctl
#[derive(Debug, Clone)]
pub struct RealPlatform {
    client: SystemdClient,
    journal: JournalReader,
    controller: ServiceController,
}

impl RealPlatform {
    pub fn new(
        client: SystemdClient,
        journal: JournalReader,
        controller: ServiceController,
    ) -> Self {
        Self {
            client,
            journal,
            controller,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let runner = CommandRunner::new(config.command_timeout());
        Self::new(
            SystemdClient::new(runner.clone(), config.systemctl_path.clone()),
            JournalReader::new(runner.clone(), config.journalctl_path.clone()),
            ServiceController::new(runner, config.systemctl_path.clone(), config.use_sudo),
        )
    }
}

#[async_trait]
impl ServicePlatform for RealPlatform {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>> {
        self.client.list_services().await
    }

    async fn service_logs(&self, service_name: &str, lines: usize) -> Result<String> {
        self.journal.tail(service_name, lines).await
    }

    async fn control_service(&self, service_name: &str, action: ServiceAction) -> Result<String> {
        self.controller.apply(service_name, action).await
    }
}
