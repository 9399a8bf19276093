// Host resource sampling

use crate::systemd::SystemStats;
use std::sync::Mutex;
use sysinfo::System;

/// Samples CPU, memory and boot time.
///
/// CPU usage is measured between consecutive calls, so one `System` is
/// kept alive for the lifetime of the reporter.
pub struct StatsReporter {
    system: Mutex<System>,
}

impl Default for StatsReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsReporter {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        system.refresh_memory();
        Self {
            system: Mutex::new(system),
        }
    }

    /// Take a fresh sample
    pub fn sample(&self) -> SystemStats {
        let mut system = self.system.lock().unwrap_or_else(|p| p.into_inner());
        system.refresh_cpu_usage();
        system.refresh_memory();

        SystemStats {
            cpu_percent: round_percent(system.global_cpu_usage() as f64),
            ram_percent: round_percent(memory_percent(
                system.used_memory(),
                system.total_memory(),
            )),
            boot_time: System::boot_time(),
        }
    }
}

/// Used memory as a percentage of total; 0 when total is unknown
pub fn memory_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64) * 100.0
}

/// Clamp to 0..=100 and round to one decimal. NaN reads as 0.
fn round_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value.clamp(0.0, 100.0) * 10.0).round() / 10.0
}
