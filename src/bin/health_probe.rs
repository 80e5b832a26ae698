//! Liveness probe for platform health checks.
//!
//! Performs one GET to `http://localhost:$PORT/health` and exits 0 when the
//! service reports `healthy` or `running`, 1 otherwise.
use deploy_smoke::{config, health, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = logging::init_tracing("warn") {
        eprintln!("Error: failed to initialise logging: {e}");
    }

    let config_path = std::env::var_os("DEPLOY_SMOKE_CONFIG").map(PathBuf::from);
    let settings = config::load_config(config_path.as_deref());
    ExitCode::from(health::run_with_settings(settings).await)
}
