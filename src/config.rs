// Configuration management

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Which service manager backend to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformMode {
    /// Real systemd on Linux, simulated everywhere else
    #[default]
    Auto,
    Real,
    Simulated,
}

impl PlatformMode {
    /// Resolve `Auto` against the OS this binary was built for
    pub fn resolve(self) -> PlatformMode {
        match self {
            PlatformMode::Auto if cfg!(target_os = "linux") => PlatformMode::Real,
            PlatformMode::Auto => PlatformMode::Simulated,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mode: PlatformMode,
    pub log_lines: usize,
    pub command_timeout_secs: u64,
    pub use_sudo: bool,
    pub systemctl_path: String,
    pub journalctl_path: String,
    pub simulated_delay_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            mode: PlatformMode::Auto,
            log_lines: 50,
            command_timeout_secs: 30,
            use_sudo: true,
            systemctl_path: "systemctl".to_string(),
            journalctl_path: "journalctl".to_string(),
            simulated_delay_ms: 1000,
            log_file: None,
        }
    }
}

impl Config {
    /// Get default config path: ~/.config/svcpanel/config.yaml
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PanelError::Config("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("svcpanel").join("config.yaml"))
    }

    /// Load config from path, falling back to defaults if not found
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| Self::default_path().unwrap_or_default());

        if config_path.is_file() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_yaml::from_str(&contents).map_err(|e| {
                PanelError::Config(format!("{}: {}", config_path.display(), e))
            })?;
            config.validate()?;
            tracing::debug!("Loaded configuration from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to path
    pub fn save(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.log_lines == 0 {
            return Err(PanelError::Config("log_lines must be at least 1".to_string()).into());
        }
        if self.command_timeout_secs == 0 {
            return Err(
                PanelError::Config("command_timeout_secs must be at least 1".to_string()).into(),
            );
        }
        if self.systemctl_path.trim().is_empty() || self.journalctl_path.trim().is_empty() {
            return Err(PanelError::Config("command paths cannot be empty".to_string()).into());
        }
        Ok(())
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
