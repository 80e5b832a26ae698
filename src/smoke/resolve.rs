// src/smoke/resolve.rs
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("no deployment target given")]
    Empty,

    #[error("invalid deployment URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Turn a CLI target into a base URL without a trailing slash.
///
/// Full `http://` / `https://` URLs pass through; anything else is taken as
/// an app name on the hosting platform.
pub fn resolve_base_url(target: &str, hosting_suffix: &str) -> Result<String, TargetError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(TargetError::Empty);
    }

    let candidate = if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{}.{}", target, hosting_suffix.trim_start_matches('.'))
    };

    Url::parse(&candidate).map_err(|source| TargetError::InvalidUrl {
        url: candidate.clone(),
        source,
    })?;

    Ok(candidate.trim_end_matches('/').to_string())
}
