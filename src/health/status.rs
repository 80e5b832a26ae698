// src/health/status.rs
use serde_json::Value;
use std::fmt;

/// The `status` field reported by a health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Running,
    Other(String),
    Unknown,
}

impl HealthStatus {
    pub fn from_body(body: &Value) -> Self {
        match body.get("status") {
            None | Some(Value::Null) => HealthStatus::Unknown,
            Some(Value::String(s)) => match s.as_str() {
                "healthy" => HealthStatus::Healthy,
                "running" => HealthStatus::Running,
                other => HealthStatus::Other(other.to_string()),
            },
            Some(other) => HealthStatus::Other(other.to_string()),
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, HealthStatus::Healthy | HealthStatus::Running)
    }

    pub fn as_str(&self) -> &str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Running => "running",
            HealthStatus::Other(s) => s,
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
