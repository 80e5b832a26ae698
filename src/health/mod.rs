// src/health/mod.rs
mod checker;
mod status;

pub use checker::{classify, exit_status, run_with_settings, LocalHealthProbe};
pub use status::HealthStatus;
