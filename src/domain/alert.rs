// Event log entries shown by the sensor views
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub time: String,
    /// Buoy name, when the entry concerns a single buoy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
    pub severity: Severity,
}

impl Alert {
    pub fn new(time: &str, source: Option<&str>, message: &str, severity: Severity) -> Self {
        Self {
            time: time.to_string(),
            source: source.map(str::to_string),
            message: message.to_string(),
            severity,
        }
    }
}
