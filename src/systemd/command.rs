// External command execution with a bounded timeout

use crate::error::{PanelError, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Runs one external program at a time and captures its output
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run `program args...` and return its stdout.
    ///
    /// A non-zero exit becomes `PanelError::CommandFailed` carrying the
    /// child's stderr. The child is killed if it outlives the timeout.
    pub async fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        let command_line = render_command_line(program, args);
        tracing::debug!("Running '{}'", command_line);

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PanelError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                tracing::warn!("'{}' timed out after {:?}", command_line, self.timeout);
                PanelError::Timeout {
                    command: command_line.clone(),
                    timeout: self.timeout,
                }
            })??;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            match output.status.code() {
                Some(code) => format!(
                    "Command '{}' returned non-zero exit status {}.",
                    command_line, code
                ),
                None => format!("Command '{}' was terminated by a signal.", command_line),
            }
        } else {
            stderr
        };

        tracing::debug!("'{}' failed: {}", command_line, message);
        Err(PanelError::CommandFailed(message).into())
    }
}

fn render_command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
