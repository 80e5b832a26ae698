// src/probe/outcome.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Pass,
    Fail,
    Warn,
}

impl OutcomeKind {
    pub fn marker(&self) -> &'static str {
        match self {
            OutcomeKind::Pass => "✅",
            OutcomeKind::Fail => "❌",
            OutcomeKind::Warn => "⚠️",
        }
    }
}

/// Classified result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub kind: OutcomeKind,
    pub message: String,
    /// Values pulled out of the response, in display order.
    pub fields: Vec<(&'static str, String)>,
}

impl ProbeOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Pass, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Fail, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Warn, message)
    }

    fn new(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_pass(&self) -> bool {
        self.kind == OutcomeKind::Pass
    }

    /// Pass and Warn are both acceptable.
    pub fn is_failure(&self) -> bool {
        self.kind == OutcomeKind::Fail
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.message)?;
        for (name, value) in &self.fields {
            write!(f, "\n   {}: {}", name, value)?;
        }
        Ok(())
    }
}
