//
// src/smoke/mod.rs
//
mod auth;
mod report;
mod resolve;
mod steps;
mod tester;

pub use auth::{auth_target, classify_auth_response, run_authenticated_probe, AUTH_PROBE_PATH, AUTH_PROBE_TITLE};
pub use report::{run_exit_status, SmokeReport, StepReport, USAGE_ERROR};
pub use resolve::{resolve_base_url, TargetError};
pub use steps::{default_steps, DocsStep, HealthStep, OpenApiStep, RootStep, SmokeStep};
pub use tester::{DeploymentSmokeTester, SKIPPED_AFTER_FAILURE, SKIPPED_WITHOUT_TOKEN};
