// Recent log retrieval via journalctl

use crate::error::Result;
use crate::systemd::CommandRunner;

#[derive(Debug, Clone)]
pub struct JournalReader {
    runner: CommandRunner,
    journalctl: String,
}

impl JournalReader {
    pub fn new(runner: CommandRunner, journalctl: impl Into<String>) -> Self {
        Self {
            runner,
            journalctl: journalctl.into(),
        }
    }

    /// Return the last `lines` journal entries for a unit, verbatim
    pub async fn tail(&self, service_name: &str, lines: usize) -> Result<String> {
        let lines = lines.to_string();
        let args = ["-u", service_name, "-n", lines.as_str(), "--no-pager"];
        self.runner.output(&self.journalctl, &args).await
    }
}
