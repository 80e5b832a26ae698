//
// src/probe/mod.rs
//
mod outcome;
mod prober;
mod target;

pub use outcome::{OutcomeKind, ProbeOutcome};
pub use prober::{ProbeError, ProbeResponse, Prober};
pub use target::{BearerToken, ProbeTarget};
