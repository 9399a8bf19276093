// Service manager integration

pub mod client;
pub mod command;
pub mod control;
pub mod journal;
pub mod metrics;
pub mod models;
pub mod platform;
pub mod simulated;


pub use client::{parse_unit_list, SystemdClient};
pub use command::CommandRunner;
pub use control::ServiceController;
pub use journal::JournalReader;
pub use metrics::StatsReporter;
pub use models::{
    validate_service_name, ControlResult, ServiceAction, ServiceRecord, ServiceStatus, SystemStats,
};
pub use platform::{RealPlatform, ServicePlatform};
pub use simulated::SimulatedPlatform;
