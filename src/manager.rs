// Service manager facade used by the HTTP handlers

use crate::config::{Config, PlatformMode};
use crate::systemd::{
    validate_service_name, ControlResult, RealPlatform, ServiceAction, ServicePlatform,
    ServiceRecord, SimulatedPlatform, StatsReporter, SystemStats,
};
use std::sync::Arc;

/// Upper bound for a single log request
pub const MAX_LOG_LINES: usize = 10_000;

/// Stateless front for stats, listing, logs and control.
///
/// Listing and log failures are turned into renderable data so the
/// dashboard always has something to show; control failures are returned
/// as an unsuccessful `ControlResult`.
pub struct ServiceManager {
    platform: Arc<dyn ServicePlatform>,
    stats: StatsReporter,
    default_log_lines: usize,
}

impl ServiceManager {
    pub fn new(platform: Arc<dyn ServicePlatform>, default_log_lines: usize) -> Self {
        Self {
            platform,
            stats: StatsReporter::new(),
            default_log_lines: default_log_lines.clamp(1, MAX_LOG_LINES),
        }
    }

    /// Build a manager with the backend selected by `config.mode`
    pub fn from_config(config: &Config) -> Self {
        let platform: Arc<dyn ServicePlatform> = match config.mode.resolve() {
            PlatformMode::Simulated => {
                tracing::info!("Using simulated service platform");
                Arc::new(SimulatedPlatform::new(config.simulated_delay()))
            }
            _ => {
                tracing::info!(
                    "Using systemd platform ({}, {})",
                    config.systemctl_path,
                    config.journalctl_path
                );
                Arc::new(RealPlatform::from_config(config))
            }
        };
        Self::new(platform, config.log_lines)
    }

    pub fn system_stats(&self) -> SystemStats {
        self.stats.sample()
    }

    pub async fn list_services(&self) -> Vec<ServiceRecord> {
        match self.platform.list_services().await {
            Ok(services) => services,
            Err(e) => {
                tracing::warn!("Failed to list services: {}", e);
                vec![ServiceRecord::listing_error(e.to_string())]
            }
        }
    }

    /// Recent logs for a unit. `lines` falls back to the configured default.
    pub async fn service_logs(&self, service_name: &str, lines: Option<usize>) -> String {
        let lines = lines
            .unwrap_or(self.default_log_lines)
            .clamp(1, MAX_LOG_LINES);

        let result = match validate_service_name(service_name) {
            Ok(()) => self.platform.service_logs(service_name, lines).await,
            Err(e) => Err(e.into()),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("Failed to read logs for {}: {}", service_name, e);
            format!("Error retrieving logs: {}", e)
        })
    }

    /// Decode `action` and apply it. Nothing is executed for an unknown
    /// action or an unacceptable name.
    pub async fn control_service(&self, service_name: &str, action: &str) -> ControlResult {
        let action: ServiceAction = match action.parse() {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!("Rejected action '{}' for {}", action, service_name);
                return ControlResult::failure(e.to_string());
            }
        };

        if let Err(e) = validate_service_name(service_name) {
            return ControlResult::failure(e.to_string());
        }

        tracing::info!("Requested {} of {}", action, service_name);
        match self.platform.control_service(service_name, action).await {
            Ok(message) => ControlResult::success(message),
            Err(e) => {
                tracing::error!("Failed to {} {}: {}", action, service_name, e);
                ControlResult::failure(e.to_string())
            }
        }
    }
}
