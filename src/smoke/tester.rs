// src/smoke/tester.rs
use super::auth::{self, AUTH_PROBE_TITLE};
use super::report::SmokeReport;
use super::steps::{default_steps, SmokeStep};
use crate::config::SmokeConfig;
use crate::probe::{BearerToken, ProbeOutcome, Prober};
use tracing::{info, warn};

pub const SKIPPED_WITHOUT_TOKEN: &str = "Skipped: no bearer token configured";
pub const SKIPPED_AFTER_FAILURE: &str = "Skipped: health check did not pass";

/// Runs the fixed check sequence against one deployment.
pub struct DeploymentSmokeTester {
    config: SmokeConfig,
    prober: Prober,
    steps: Vec<Box<dyn SmokeStep>>,
}

impl DeploymentSmokeTester {
    pub fn new(config: SmokeConfig, prober: Prober) -> Self {
        Self::with_steps(config, prober, default_steps())
    }

    pub fn with_steps(config: SmokeConfig, prober: Prober, steps: Vec<Box<dyn SmokeStep>>) -> Self {
        Self {
            config,
            prober,
            steps,
        }
    }

    /// Steps run in order. A failing gate step ends the run; every other
    /// failure is recorded and the sequence moves on.
    pub async fn run(&self, base_url: &str) -> SmokeReport {
        let mut report = SmokeReport::new(base_url);
        info!("Testing deployment at {}", base_url);

        for step in &self.steps {
            let outcome = step.run(&self.prober, base_url, self.config.timeout()).await;
            log_outcome(step.title(), &outcome);
            report.record(step.title(), outcome, step.is_gate());

            if !report.passed() {
                warn!("{} did not pass, skipping remaining checks", step.label());
                break;
            }
        }

        report
    }

    pub async fn run_authenticated_probe(&self, base_url: &str, token: &BearerToken) -> ProbeOutcome {
        let outcome =
            auth::run_authenticated_probe(&self.prober, base_url, token, self.config.auth_timeout())
                .await;
        log_outcome(AUTH_PROBE_TITLE, &outcome);
        outcome
    }

    /// Full run, followed by the authenticated probe when the sequence passed
    /// and a token is available. A skipped probe is still recorded as a warning.
    pub async fn run_with_auth(&self, base_url: &str, token: Option<&BearerToken>) -> SmokeReport {
        let mut report = self.run(base_url).await;

        let outcome = match token {
            _ if !report.passed() => {
                warn!("Skipping authenticated probe after failed run");
                ProbeOutcome::warn(SKIPPED_AFTER_FAILURE)
            }
            Some(token) => self.run_authenticated_probe(base_url, token).await,
            None => {
                warn!("No bearer token configured, skipping authenticated probe");
                ProbeOutcome::warn(SKIPPED_WITHOUT_TOKEN)
            }
        };
        report.record(AUTH_PROBE_TITLE, outcome, false);

        report
    }
}

fn log_outcome(title: &str, outcome: &ProbeOutcome) {
    if outcome.is_failure() {
        warn!(step = title, "{}", outcome.message);
    } else {
        info!(step = title, "{}", outcome.message);
    }
}
