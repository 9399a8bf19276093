// Stand-in service manager for hosts without systemd

use crate::error::Result;
use crate::systemd::{ServiceAction, ServicePlatform, ServiceRecord, ServiceStatus};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

pub const SIMULATED_HOST: &str = "ubuntu-server";
pub const SIMULATED_LOG_LINES: usize = 20;

const CATALOG: [(&str, &str); 8] = [
    ("nginx.service", "A high performance web server and a reverse proxy server"),
    ("postgresql.service", "PostgreSQL RDBMS"),
    ("docker.service", "Docker Application Container Engine"),
    ("ssh.service", "OpenBSD Secure Shell server"),
    ("cron.service", "Regular background program processing daemon"),
    ("networking.service", "Raise network interfaces"),
    ("firewalld.service", "firewalld - dynamic firewall daemon"),
    ("redis.service", "Redis persistent key-value database"),
];

/// Fake platform with a fixed catalog, random logs and always-successful control
#[derive(Debug, Clone)]
pub struct SimulatedPlatform {
    control_delay: Duration,
}

impl Default for SimulatedPlatform {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl SimulatedPlatform {
    pub fn new(control_delay: Duration) -> Self {
        Self { control_delay }
    }
}

#[async_trait]
impl ServicePlatform for SimulatedPlatform {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>> {
        Ok(catalog())
    }

    async fn service_logs(&self, service_name: &str, _lines: usize) -> Result<String> {
        Ok(render_logs(service_name, &mut rand::thread_rng()))
    }

    async fn control_service(&self, service_name: &str, action: ServiceAction) -> Result<String> {
        tokio::time::sleep(self.control_delay).await;
        Ok(format!(
            "Mock: Service {} {} successfully",
            service_name,
            action.past_tense()
        ))
    }
}

fn catalog() -> Vec<ServiceRecord> {
    CATALOG
        .iter()
        .map(|(name, description)| {
            let status = if name.contains("firewall") {
                ServiceStatus::Failed
            } else if name.contains("redis") {
                ServiceStatus::Stopped
            } else {
                ServiceStatus::Running
            };
            ServiceRecord::new(*name, status, *description)
        })
        .collect()
}

/// Messages a simulated unit may log
pub fn log_templates(service_name: &str) -> [String; 8] {
    [
        format!("Started {}", service_name),
        "Listening on port 80".to_string(),
        "Connection received from 192.168.1.105".to_string(),
        "Processing request /api/v1/data".to_string(),
        "Error: Connection timed out".to_string(),
        "Configuration loaded successfully".to_string(),
        "Worker process started".to_string(),
        format!("Stopping {}", service_name),
    ]
}

/// Build journal-style lines: `<time> <host> <unit>[<pid>]: <message>`
pub fn render_logs<R: Rng>(service_name: &str, rng: &mut R) -> String {
    let timestamp = chrono::Local::now().format("%b %d %H:%M:%S").to_string();
    let process = service_name.replace(".service", "");
    let templates = log_templates(service_name);

    (0..SIMULATED_LOG_LINES)
        .map(|_| {
            let message = templates.choose(&mut *rng).map(String::as_str).unwrap_or_default();
            format!(
                "{} {} {}[{}]: {}",
                timestamp,
                SIMULATED_HOST,
                process,
                rng.gen_range(1000..=9999),
                message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
