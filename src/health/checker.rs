// src/health/checker.rs
use super::status::HealthStatus;
use crate::config::{LocalProbeConfig, Settings};
use crate::probe::{ProbeError, ProbeOutcome, ProbeResponse, ProbeTarget, Prober};
use anyhow::Context;
use reqwest::StatusCode;
use serde_json::Value;
use std::process::ExitCode;
use tracing::{info, warn};

/// Single-shot liveness check against the local service.
pub struct LocalHealthProbe {
    config: LocalProbeConfig,
    prober: Prober,
}

impl LocalHealthProbe {
    pub fn new(config: LocalProbeConfig, prober: Prober) -> Self {
        Self { config, prober }
    }

    pub fn target(&self) -> ProbeTarget {
        ProbeTarget::get(self.config.url(), self.config.timeout())
    }

    pub async fn check(&self) -> ProbeOutcome {
        let target = self.target();
        info!("Checking health at {}", target.url);

        let outcome = match self.prober.execute(&target).await {
            Ok(response) => classify(&response),
            Err(e) => ProbeOutcome::fail(format!("Health check error: {}", e)),
        };

        if outcome.is_pass() {
            info!("Local service is healthy");
        } else {
            warn!("Local service is unhealthy: {}", outcome.message);
        }
        outcome
    }

    /// Check once, print the one-line verdict and return the exit status.
    pub async fn run_status(&self) -> u8 {
        let outcome = self.check().await;
        println!("{}", outcome);
        exit_status(&outcome)
    }

    pub async fn run(&self) -> ExitCode {
        ExitCode::from(self.run_status().await)
    }
}

/// Build the probe from loaded settings and run it. A setup error is a
/// failed check too.
pub async fn run_with_settings(settings: anyhow::Result<Settings>) -> u8 {
    let probe = settings.and_then(|settings| {
        let prober = Prober::new().context("Failed to create HTTP client")?;
        Ok(LocalHealthProbe::new(settings.local, prober))
    });

    match probe {
        Ok(probe) => probe.run_status().await,
        Err(e) => {
            let outcome = ProbeOutcome::fail(format!("Health check error: {:#}", e));
            println!("{}", outcome);
            exit_status(&outcome)
        }
    }
}

/// Only HTTP 200 with a `healthy` or `running` status passes.
pub fn classify(response: &ProbeResponse) -> ProbeOutcome {
    if response.status != StatusCode::OK {
        let err = ProbeError::Http(response.status.as_u16());
        return ProbeOutcome::fail(format!("Health check failed: {}", err));
    }

    let body: Value = match response.json() {
        Ok(body) => body,
        Err(e) => return ProbeOutcome::fail(format!("Health check error: {}", e)),
    };

    let status = HealthStatus::from_body(&body);
    if status.is_up() {
        ProbeOutcome::pass("Health check passed")
    } else {
        ProbeOutcome::fail(format!("Health check failed: {}", status))
    }
}

pub fn exit_status(outcome: &ProbeOutcome) -> u8 {
    if outcome.is_pass() {
        0
    } else {
        1
    }
}
