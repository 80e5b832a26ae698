// src/config/models.rs
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub local: LocalProbeConfig,
    pub smoke: SmokeConfig,
}

/// Liveness probe against the service running next to us.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalProbeConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub timeout_secs: u64,
}

impl Default for LocalProbeConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8001,
            path: "/health".to_string(),
            timeout_secs: 10,
        }
    }
}

impl LocalProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Appended to bare app names: `myapp` -> `https://myapp.<suffix>`.
    pub hosting_suffix: String,
    pub timeout_secs: u64,
    pub auth_timeout_secs: u64,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            hosting_suffix: "herokuapp.com".to_string(),
            timeout_secs: 30,
            auth_timeout_secs: 60,
        }
    }
}

impl SmokeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn auth_timeout(&self) -> Duration {
        Duration::from_secs(self.auth_timeout_secs)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("local.path must start with '/', got {0:?}")]
    RelativePath(String),
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let local = &self.local;
        if local.host.trim().is_empty() {
            return Err(ConfigError::Empty("local.host"));
        }
        if local.port == 0 {
            return Err(ConfigError::ZeroValue("local.port"));
        }
        if !local.path.starts_with('/') {
            return Err(ConfigError::RelativePath(local.path.clone()));
        }
        if local.timeout_secs == 0 {
            return Err(ConfigError::ZeroValue("local.timeout_secs"));
        }

        let smoke = &self.smoke;
        if smoke.hosting_suffix.trim().is_empty() {
            return Err(ConfigError::Empty("smoke.hosting_suffix"));
        }
        if smoke.timeout_secs == 0 {
            return Err(ConfigError::ZeroValue("smoke.timeout_secs"));
        }
        if smoke.auth_timeout_secs == 0 {
            return Err(ConfigError::ZeroValue("smoke.auth_timeout_secs"));
        }
        Ok(())
    }
}
