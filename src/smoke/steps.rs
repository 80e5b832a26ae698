// src/smoke/steps.rs
use crate::probe::{ProbeError, ProbeOutcome, ProbeResponse, ProbeTarget, Prober};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

const NOT_AVAILABLE: &str = "N/A";

/// One GET check in the deployment sequence.
#[async_trait]
pub trait SmokeStep: Send + Sync {
    /// Heading printed above the step's outcome.
    fn title(&self) -> &'static str;

    /// Used in failure lines: "<label> failed: ...", "<label> error: ...".
    fn label(&self) -> &'static str;

    fn path(&self) -> &'static str;

    /// A gate step that does not pass aborts the rest of the run.
    fn is_gate(&self) -> bool {
        false
    }

    /// Interpret an HTTP 200 response.
    fn on_ok(&self, base_url: &str, response: &ProbeResponse) -> Result<ProbeOutcome, ProbeError>;

    async fn run(&self, prober: &Prober, base_url: &str, timeout: Duration) -> ProbeOutcome {
        let target = ProbeTarget::get(format!("{}{}", base_url, self.path()), timeout);

        let result = match prober.execute(&target).await {
            Ok(response) => match response.require_status(StatusCode::OK) {
                Ok(response) => self.on_ok(base_url, response),
                Err(http) => {
                    return ProbeOutcome::fail(format!("{} failed: {}", self.label(), http))
                }
            },
            Err(e) => Err(e),
        };

        result.unwrap_or_else(|e| ProbeOutcome::fail(format!("{} error: {}", self.label(), e)))
    }
}

fn string_field<'a>(value: &'a Value, pointer: &str, default: &'a str) -> &'a str {
    value.pointer(pointer).and_then(Value::as_str).unwrap_or(default)
}

pub struct HealthStep;

#[async_trait]
impl SmokeStep for HealthStep {
    fn title(&self) -> &'static str {
        "Testing health endpoint"
    }

    fn label(&self) -> &'static str {
        "Health check"
    }

    fn path(&self) -> &'static str {
        "/health"
    }

    fn is_gate(&self) -> bool {
        true
    }

    fn on_ok(&self, _base_url: &str, response: &ProbeResponse) -> Result<ProbeOutcome, ProbeError> {
        // Any 200 opens the gate; the reported status is informational.
        let status = response
            .json::<Value>()
            .map(|body| string_field(&body, "/status", "unknown").to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        Ok(ProbeOutcome::pass("Health check passed").with_field("Status", status))
    }
}

pub struct RootStep;

#[async_trait]
impl SmokeStep for RootStep {
    fn title(&self) -> &'static str {
        "Testing root endpoint"
    }

    fn label(&self) -> &'static str {
        "Root endpoint"
    }

    fn path(&self) -> &'static str {
        "/"
    }

    fn on_ok(&self, _base_url: &str, response: &ProbeResponse) -> Result<ProbeOutcome, ProbeError> {
        let body: Value = response.json()?;
        Ok(ProbeOutcome::pass("Root endpoint accessible")
            .with_field("Message", string_field(&body, "/message", NOT_AVAILABLE)))
    }
}

pub struct DocsStep;

#[async_trait]
impl SmokeStep for DocsStep {
    fn title(&self) -> &'static str {
        "Testing API documentation"
    }

    fn label(&self) -> &'static str {
        "Documentation"
    }

    fn path(&self) -> &'static str {
        "/docs"
    }

    fn on_ok(&self, base_url: &str, _response: &ProbeResponse) -> Result<ProbeOutcome, ProbeError> {
        Ok(ProbeOutcome::pass("API documentation accessible")
            .with_field("Documentation URL", format!("{}{}", base_url, self.path())))
    }
}

pub struct OpenApiStep;

#[async_trait]
impl SmokeStep for OpenApiStep {
    fn title(&self) -> &'static str {
        "Testing OpenAPI schema"
    }

    fn label(&self) -> &'static str {
        "OpenAPI schema"
    }

    fn path(&self) -> &'static str {
        "/openapi.json"
    }

    fn on_ok(&self, _base_url: &str, response: &ProbeResponse) -> Result<ProbeOutcome, ProbeError> {
        let schema: Value = response.json()?;
        Ok(ProbeOutcome::pass("OpenAPI schema accessible")
            .with_field("API Title", string_field(&schema, "/info/title", NOT_AVAILABLE))
            .with_field("API Version", string_field(&schema, "/info/version", NOT_AVAILABLE)))
    }
}

/// Health gate first, then root, docs and schema.
pub fn default_steps() -> Vec<Box<dyn SmokeStep>> {
    vec![
        Box::new(HealthStep),
        Box::new(RootStep),
        Box::new(DocsStep),
        Box::new(OpenApiStep),
    ]
}
