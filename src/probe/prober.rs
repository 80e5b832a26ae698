// src/probe/prober.rs
use super::target::ProbeTarget;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {0}")]
    Http(u16),

    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Status and body of a request that completed within its timeout.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ProbeResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ProbeError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Anything but `expected` becomes [`ProbeError::Http`].
    pub fn require_status(&self, expected: StatusCode) -> Result<&Self, ProbeError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ProbeError::Http(self.status.as_u16()))
        }
    }

    /// Body text cut to at most `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> String {
        String::from_utf8_lossy(&self.body)
            .chars()
            .take(max_chars)
            .collect()
    }
}

/// Issues probe requests one at a time over a shared client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(concat!("deploy-smoke/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub async fn execute(&self, target: &ProbeTarget) -> Result<ProbeResponse, ProbeError> {
        let start = Instant::now();

        let mut request = self
            .client
            .request(target.method.clone(), target.url.as_str());
        if let Some(payload) = &target.payload {
            request = request.json(payload);
        }
        if let Some(token) = &target.bearer {
            request = request.bearer_auth(token.as_str());
        }

        // The timeout covers reading the body, not just the headers.
        let result = timeout(target.timeout, async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(ProbeResponse {
                status,
                body: body.to_vec(),
            })
        })
        .await;

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(Ok(response)) => {
                debug!(
                    method = %target.method,
                    url = %target.url,
                    status = response.status.as_u16(),
                    elapsed_ms,
                    "probe completed"
                );
                Ok(response)
            }
            Ok(Err(e)) => {
                debug!(method = %target.method, url = %target.url, elapsed_ms, error = %e, "probe failed");
                Err(ProbeError::Network(e))
            }
            Err(_) => {
                debug!(method = %target.method, url = %target.url, elapsed_ms, "probe timed out");
                Err(ProbeError::Timeout(target.timeout))
            }
        }
    }
}
