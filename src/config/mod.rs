mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Prefix for environment overrides, e.g. `DEPLOY_SMOKE__SMOKE__TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "DEPLOY_SMOKE";

/// Load settings from defaults, an optional file (YAML, JSON or TOML) and the
/// process environment.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    load_config_with_env(path, std::env::vars().collect())
}

/// Same as [`load_config`] but reads overrides from `env` instead of the
/// process environment.
pub fn load_config_with_env(path: Option<&Path>, env: ::config::Map<String, String>) -> Result<Settings> {
    let mut builder = ::config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(::config::File::from(path).required(true));
    }

    // The platform hands the port to the process as a bare PORT variable.
    let port = env.get("PORT").cloned();

    builder = builder
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(Some(env)),
        )
        .set_override_option("local.port", port)
        .context("Failed to apply PORT override")?;

    let settings: Settings = builder
        .build()
        .context("Failed to load configuration")?
        .try_deserialize()
        .context("Failed to parse configuration")?;

    settings.validate()?;
    Ok(settings)
}
