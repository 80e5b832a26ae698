// src/smoke/auth.rs
use crate::probe::{BearerToken, ProbeOutcome, ProbeResponse, ProbeTarget, Prober};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use tracing::warn;

pub const AUTH_PROBE_TITLE: &str = "Testing main API endpoint (requires valid API keys)";
pub const AUTH_PROBE_PATH: &str = "/hackrx/run";

const SAMPLE_DOCUMENT: &str = "https://www.example.com/sample.pdf";
const SAMPLE_QUESTION: &str = "What is this document about?";
const PREVIEW_CHARS: usize = 200;

pub fn auth_target(base_url: &str, token: &BearerToken, timeout: Duration) -> ProbeTarget {
    let payload = json!({
        "documents": SAMPLE_DOCUMENT,
        "questions": [SAMPLE_QUESTION],
    });
    ProbeTarget::post(format!("{}{}", base_url, AUTH_PROBE_PATH), timeout, payload)
        .with_bearer(token.clone())
}

/// POST a sample query to the business endpoint. Never fails; every result is
/// folded into the returned outcome.
pub async fn run_authenticated_probe(
    prober: &Prober,
    base_url: &str,
    token: &BearerToken,
    timeout: Duration,
) -> ProbeOutcome {
    let target = auth_target(base_url, token, timeout);
    match prober.execute(&target).await {
        Ok(response) => classify_auth_response(&response),
        Err(e) => {
            warn!("Authenticated probe failed: {}", e);
            ProbeOutcome::fail(format!("API endpoint error: {}", e))
        }
    }
}

/// 401 and 422 mean the endpoint is up and guarding its input.
pub fn classify_auth_response(response: &ProbeResponse) -> ProbeOutcome {
    match response.status {
        StatusCode::OK => ProbeOutcome::pass("API endpoint accessible (authentication works)"),
        StatusCode::UNAUTHORIZED => {
            ProbeOutcome::warn("API endpoint requires authentication (expected)")
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            ProbeOutcome::warn("API endpoint validation error (check document URL)")
        }
        status => ProbeOutcome::fail(format!("API endpoint error: {}", status.as_u16()))
            .with_field("Response", format!("{}...", response.preview(PREVIEW_CHARS))),
    }
}
