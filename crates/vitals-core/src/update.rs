//! Update protocol: the single gate between external records and the store.
//!
//! Every externally supplied record is validated here before it can touch
//! the aggregation store. Single updates echo the post-update record; batch
//! updates apply each record independently and read back by id.

use tracing::debug;

use crate::error::{Result, VitalsError};
use crate::metric::{MetricKind, MetricRecord};
use crate::store::Storage;

/// Result of a batch update: read-back records for every successfully
/// applied id, plus the per-record errors (order matches the failing inputs).
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<MetricRecord>,
    pub errors: Vec<VitalsError>,
}

impl BatchOutcome {
    pub fn all_applied(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate one record and apply it to the store.
///
/// Returns the post-update record for the same `(kind, id)`. The read-back
/// miss maps to `NotFound`; the store never deletes, so that path is
/// unreachable in practice and exists defensively.
pub fn apply_record(store: &dyn Storage, record: &MetricRecord) -> Result<MetricRecord> {
    record.validate()?;
    match record.kind {
        MetricKind::Counter => {
            // validate() guarantees the field is present.
            let delta = record.delta.ok_or_else(|| {
                VitalsError::Internal(format!("validated counter {:?} lost its delta", record.id))
            })?;
            let total = store.update_counter(&record.id, delta);
            debug!(id = %record.id, delta, total, "counter updated");
        }
        MetricKind::Gauge => {
            let value = record.value.ok_or_else(|| {
                VitalsError::Internal(format!("validated gauge {:?} lost its value", record.id))
            })?;
            store.update_gauge(&record.id, value);
            debug!(id = %record.id, value, "gauge updated");
        }
    }
    store
        .record(record.kind, &record.id)
        .ok_or(VitalsError::NotFound)
}

/// Apply an ordered batch of records.
///
/// Each record is validated and applied independently; one failure never
/// blocks later records. Read-back is by id only, not `(kind, id)` — an id
/// used for both kinds resolves to its counter entry.
pub fn apply_batch(store: &dyn Storage, records: &[MetricRecord]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    let mut applied_ids: Vec<&str> = Vec::with_capacity(records.len());

    for record in records {
        match record.validate() {
            Ok(()) => match record.kind {
                MetricKind::Counter => {
                    if let Some(delta) = record.delta {
                        store.update_counter(&record.id, delta);
                        applied_ids.push(&record.id);
                    }
                }
                MetricKind::Gauge => {
                    if let Some(value) = record.value {
                        store.update_gauge(&record.id, value);
                        applied_ids.push(&record.id);
                    }
                }
            },
            Err(err) => outcome.errors.push(err),
        }
    }

    for id in applied_ids {
        if let Some(record) = store.record_for_id(id) {
            outcome.records.push(record);
        }
    }
    outcome
}
