// Request and response bodies

use serde::{Deserialize, Serialize};

/// Query string of a logs request. `lines` is kept as text so a bad value
/// falls back to the default instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    pub lines: Option<String>,
}

impl LogsQuery {
    /// Requested line count. Zero and negative values become 1, values too
    /// large for `usize` saturate, anything that is not an integer is ignored.
    pub fn requested_lines(&self) -> Option<usize> {
        let raw = self.lines.as_deref()?.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if negative {
            return Some(1);
        }

        Some(digits.parse::<usize>().map_or(usize::MAX, |n| n.max(1)))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: String,
}

/// Body of a control request. A missing action is treated like an unknown one.
#[derive(Debug, Default, Deserialize)]
pub struct ControlRequest {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ControlResponse {
    pub status: String,
    pub message: String,
}

impl ControlResponse {
    pub fn success(message: String) -> Self {
        Self {
            status: "success".to_string(),
            message,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
        }
    }
}
