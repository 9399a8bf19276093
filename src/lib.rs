// Svcpanel - HTTP control panel for systemd services
// Library root

pub mod config;
pub mod error;
pub mod manager;
pub mod systemd;
pub mod version;
pub mod web;
