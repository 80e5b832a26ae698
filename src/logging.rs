// src/logging.rs
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the human-readable verdict.
pub fn init_tracing(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("deploy_smoke={}", default_level)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
