// src/main.rs
use anyhow::{bail, Context, Result};
use clap::Parser;
use deploy_smoke::{
    config, logging,
    probe::{BearerToken, Prober},
    smoke::{resolve_base_url, run_exit_status, DeploymentSmokeTester, SmokeReport},
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "smoke-test")]
#[command(about = "Smoke test a deployed web service over HTTP")]
#[command(version)]
struct Cli {
    /// Deployment URL, or a bare app name on the hosting platform
    #[arg(env = "SMOKE_TARGET")]
    target: Option<String>,

    /// Prompt for the app name when no target is given
    #[arg(long)]
    interactive: bool,

    /// Bearer token for the authenticated API probe
    #[arg(long, env = "SMOKE_BEARER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Fail instead of skipping the authenticated probe when no token is set
    #[arg(long)]
    require_auth: bool,

    /// Config file (YAML, JSON or TOML)
    #[arg(long, env = "DEPLOY_SMOKE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing("warn") {
        eprintln!("Error: failed to initialise logging: {e}");
    }

    let result = run(cli).await;
    match &result {
        Ok(report) => println!("{report}"),
        Err(e) => eprintln!("Error: {e:#}"),
    }
    ExitCode::from(run_exit_status(&result))
}

async fn run(cli: Cli) -> Result<SmokeReport> {
    let settings = config::load_config(cli.config.as_deref())?;

    let target = match cli.target {
        Some(target) => target,
        None if cli.interactive => prompt_app_name()?,
        None => bail!(
            "no deployment target: pass a URL or app name, set SMOKE_TARGET, or use --interactive"
        ),
    };
    let base_url = resolve_base_url(&target, &settings.smoke.hosting_suffix)?;

    let token = cli.token.and_then(BearerToken::new);
    if cli.require_auth && token.is_none() {
        bail!("--require-auth needs a bearer token (--token or SMOKE_BEARER_TOKEN)");
    }

    let prober = Prober::new().context("Failed to create HTTP client")?;
    let tester = DeploymentSmokeTester::new(settings.smoke, prober);
    Ok(tester.run_with_auth(&base_url, token.as_ref()).await)
}

fn prompt_app_name() -> Result<String> {
    print!("Enter your app name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read app name from stdin")?;
    Ok(line.trim().to_string())
}
