//! Shared error type across vitals crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Unified error type used by the core, the collector, and the agent.
///
/// `NotFound` is an outcome, not a fault: a query for a metric that was never
/// submitted resolves to it and callers must not log it as an error.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// Malformed input: empty id, unknown kind, missing or mismatched value.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// No stored entry for the requested metric identity.
    #[error("metric not found")]
    NotFound,
    /// The reporter could not deliver a batch to the collector.
    #[error("transport: {0}")]
    Transport(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl VitalsError {
    /// Whether this error is caused by the caller's input.
    pub fn is_client(&self) -> bool {
        matches!(self, VitalsError::BadRequest(_) | VitalsError::NotFound)
    }
}
