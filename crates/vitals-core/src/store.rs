//! Aggregation store: current values for all known metrics.
//!
//! One reader/writer lock covers the whole table. Readers run concurrently,
//! writers exclude all other access; no store operation performs blocking
//! I/O, so hold times stay short. Entries are created lazily on first update
//! and never deleted — the store lives for the process lifetime with no
//! flush-to-disk step.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, VitalsError};
use crate::metric::{MetricKind, MetricRecord};

/// Storage seam between the update protocol and a concrete table.
pub trait Storage: Send + Sync {
    /// Add `delta` to the counter `id` (0 if absent); returns the new total.
    /// Overflow wraps per two's-complement arithmetic.
    fn update_counter(&self, id: &str, delta: i64) -> i64;

    /// Replace the gauge `id` with `value` (last write wins).
    fn update_gauge(&self, id: &str, value: f64);

    /// Current value for `(kind, id)` in its textual convention: counters as
    /// base-10 integers, gauges as a minimal-precision decimal.
    fn value(&self, kind: MetricKind, id: &str) -> Result<String>;

    /// Full record for `(kind, id)`, if present.
    fn record(&self, kind: MetricKind, id: &str) -> Option<MetricRecord>;

    /// Full record for `id` regardless of kind; counters are consulted first.
    fn record_for_id(&self, id: &str) -> Option<MetricRecord>;

    /// Human-readable snapshot: all counters, then all gauges. Iteration
    /// order within each section is unspecified.
    fn render(&self) -> String;
}

#[derive(Debug, Default)]
struct Tables {
    counters: HashMap<String, i64>,
    gauges: HashMap<String, f64>,
}

/// In-memory [`Storage`] backed by a single coarse `RwLock`.
#[derive(Debug, Default)]
pub struct MemStorage {
    inner: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another thread panicked mid-access; the
    // table itself stays usable, so recover the guard instead of panicking.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemStorage {
    fn update_counter(&self, id: &str, delta: i64) -> i64 {
        let mut tables = self.write();
        let slot = tables.counters.entry(id.to_string()).or_insert(0);
        *slot = slot.wrapping_add(delta);
        *slot
    }

    fn update_gauge(&self, id: &str, value: f64) {
        self.write().gauges.insert(id.to_string(), value);
    }

    fn value(&self, kind: MetricKind, id: &str) -> Result<String> {
        let tables = self.read();
        match kind {
            MetricKind::Counter => tables
                .counters
                .get(id)
                .map(|v| v.to_string())
                .ok_or(VitalsError::NotFound),
            MetricKind::Gauge => tables
                .gauges
                .get(id)
                .map(|v| v.to_string())
                .ok_or(VitalsError::NotFound),
        }
    }

    fn record(&self, kind: MetricKind, id: &str) -> Option<MetricRecord> {
        let tables = self.read();
        match kind {
            MetricKind::Counter => tables
                .counters
                .get(id)
                .map(|&v| MetricRecord::counter(id, v)),
            MetricKind::Gauge => tables.gauges.get(id).map(|&v| MetricRecord::gauge(id, v)),
        }
    }

    fn record_for_id(&self, id: &str) -> Option<MetricRecord> {
        let tables = self.read();
        if let Some(&v) = tables.counters.get(id) {
            return Some(MetricRecord::counter(id, v));
        }
        tables.gauges.get(id).map(|&v| MetricRecord::gauge(id, v))
    }

    fn render(&self) -> String {
        let tables = self.read();
        let mut out = String::from("[counters]\n");
        for (id, v) in &tables.counters {
            out.push_str(&format!("{id}: {v}\n"));
        }
        out.push_str("[gauges]\n");
        for (id, v) in &tables.gauges {
            out.push_str(&format!("{id}: {v}\n"));
        }
        out
    }
}
