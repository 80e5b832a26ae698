// src/smoke/report.rs
use crate::probe::ProbeOutcome;
use chrono::{DateTime, Utc};
use std::fmt;

/// Exit status when the run could not start (bad target, config or flags).
pub const USAGE_ERROR: u8 = 2;

/// 0 for a passed run, 1 when the health gate failed, [`USAGE_ERROR`] when
/// there is no report at all.
pub fn run_exit_status<E>(result: &Result<SmokeReport, E>) -> u8 {
    match result {
        Ok(report) if report.passed() => 0,
        Ok(_) => 1,
        Err(_) => USAGE_ERROR,
    }
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub title: &'static str,
    pub outcome: ProbeOutcome,
    pub gate: bool,
}

/// Ordered results of one smoke run.
#[derive(Debug, Clone)]
pub struct SmokeReport {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub steps: Vec<StepReport>,
    pub aborted: bool,
}

impl SmokeReport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            started_at: Utc::now(),
            steps: Vec::new(),
            aborted: false,
        }
    }

    pub fn record(&mut self, title: &'static str, outcome: ProbeOutcome, gate: bool) {
        if gate && !outcome.is_pass() {
            self.aborted = true;
        }
        self.steps.push(StepReport {
            title,
            outcome,
            gate,
        });
    }

    /// True iff no gate step failed. Non-gate failures are informational.
    pub fn passed(&self) -> bool {
        !self.aborted
    }

    pub fn step(&self, title: &str) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.title == title)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| s.outcome.is_failure())
    }

    pub fn docs_url(&self) -> String {
        format!("{}/docs", self.base_url)
    }

    pub fn redoc_url(&self) -> String {
        format!("{}/redoc", self.base_url)
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Testing deployment at: {}", self.base_url)?;
        writeln!(f, "Started: {}", self.started_at.format("%Y-%m-%d %H:%M:%S UTC"))?;

        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {}...", i + 1, step.title)?;
            writeln!(f, "{}", step.outcome)?;
        }

        writeln!(f)?;
        if self.passed() {
            writeln!(f, "🎉 Deployment test completed!")?;
            writeln!(f, "📱 Your app is available at: {}", self.base_url)?;
            writeln!(f, "📚 API Documentation: {}", self.docs_url())?;
            write!(f, "📋 Alternative Docs: {}", self.redoc_url())
        } else {
            write!(f, "💥 Deployment test aborted: health check did not pass")
        }
    }
}
