//! Metric record: the wire and staging representation of one named sample.
//!
//! The JSON field names (`id`, `type`, `delta`, `value`) are a frozen
//! contract; `delta` is present only for counters, `value` only for gauges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitalsError};

/// The two supported metric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Submitted values are deltas accumulated into a running total.
    Counter,
    /// Submitted values replace the stored value (last write wins).
    Gauge,
}

impl MetricKind {
    /// String form used in URLs and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "counter" => Ok(MetricKind::Counter),
            "gauge" => Ok(MetricKind::Gauge),
            other => Err(VitalsError::BadRequest(format!(
                "unknown metric kind: {other}"
            ))),
        }
    }
}

/// One named metric sample.
///
/// A well-formed record has a non-empty `id` and exactly the value field that
/// matches its kind populated. [`MetricRecord::validate`] is the gate; raw
/// deserialized records must pass it before reaching the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MetricKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl MetricRecord {
    /// Build a counter record carrying `delta`.
    pub fn counter(id: impl Into<String>, delta: i64) -> Self {
        Self {
            id: id.into(),
            kind: MetricKind::Counter,
            delta: Some(delta),
            value: None,
        }
    }

    /// Build a gauge record carrying `value`.
    pub fn gauge(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            kind: MetricKind::Gauge,
            delta: None,
            value: Some(value),
        }
    }

    /// Fail-fast well-formedness check: non-empty id, then the value field
    /// required by the kind.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(VitalsError::BadRequest("metric id is empty".into()));
        }
        match self.kind {
            MetricKind::Counter if self.delta.is_none() => Err(VitalsError::BadRequest(format!(
                "counter {:?} has no delta",
                self.id
            ))),
            MetricKind::Gauge if self.value.is_none() => Err(VitalsError::BadRequest(format!(
                "gauge {:?} has no value",
                self.id
            ))),
            _ => Ok(()),
        }
    }
}
