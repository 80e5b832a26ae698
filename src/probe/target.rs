// src/probe/target.rs
use reqwest::Method;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// A static bearer token. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs.
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// One request to issue: where, how long to wait, and what to send.
#[derive(Debug, Clone)]
pub struct ProbeTarget {
    pub url: String,
    pub timeout: Duration,
    pub method: Method,
    pub payload: Option<Value>,
    pub bearer: Option<BearerToken>,
}

impl ProbeTarget {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            method: Method::GET,
            payload: None,
            bearer: None,
        }
    }

    pub fn post(url: impl Into<String>, timeout: Duration, payload: Value) -> Self {
        Self {
            url: url.into(),
            timeout,
            method: Method::POST,
            payload: Some(payload),
            bearer: None,
        }
    }

    pub fn with_bearer(mut self, token: BearerToken) -> Self {
        self.bearer = Some(token);
        self
    }
}
