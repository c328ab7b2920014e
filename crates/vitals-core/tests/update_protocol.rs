//! Update-protocol gate tests: validation, dispatch, and batch independence.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vitals_core::update::{apply_batch, apply_record};
use vitals_core::{MemStorage, MetricKind, MetricRecord, Storage, VitalsError};

#[test]
fn single_update_echoes_post_update_record() {
    let store = MemStorage::new();
    apply_record(&store, &MetricRecord::counter("requests", 5)).unwrap();
    let echoed = apply_record(&store, &MetricRecord::counter("requests", 3)).unwrap();
    assert_eq!(echoed.id, "requests");
    assert_eq!(echoed.kind, MetricKind::Counter);
    assert_eq!(echoed.delta, Some(8));
    assert_eq!(echoed.value, None);
}

#[test]
fn empty_id_is_rejected_without_mutation() {
    let store = MemStorage::new();
    let err = apply_record(&store, &MetricRecord::gauge("", 1.0)).unwrap_err();
    assert!(matches!(err, VitalsError::BadRequest(_)));
    assert!(store.render().trim_end().ends_with("[gauges]"));
}

#[test]
fn missing_value_field_is_rejected() {
    let store = MemStorage::new();
    let bare_counter = MetricRecord {
        id: "c".into(),
        kind: MetricKind::Counter,
        delta: None,
        value: None,
    };
    assert!(matches!(
        apply_record(&store, &bare_counter),
        Err(VitalsError::BadRequest(_))
    ));

    let bare_gauge = MetricRecord {
        id: "g".into(),
        kind: MetricKind::Gauge,
        delta: None,
        value: None,
    };
    assert!(matches!(
        apply_record(&store, &bare_gauge),
        Err(VitalsError::BadRequest(_))
    ));
    assert!(store.record_for_id("c").is_none());
    assert!(store.record_for_id("g").is_none());
}

#[test]
fn gauge_resubmission_is_idempotent_counter_is_not() {
    let store = MemStorage::new();
    let gauge = MetricRecord::gauge("heap", 98.25);
    apply_record(&store, &gauge).unwrap();
    apply_record(&store, &gauge).unwrap();
    assert_eq!(store.value(MetricKind::Gauge, "heap").unwrap(), "98.25");

    let counter = MetricRecord::counter("polls", 4);
    apply_record(&store, &counter).unwrap();
    apply_record(&store, &counter).unwrap();
    assert_eq!(store.value(MetricKind::Counter, "polls").unwrap(), "8");
}

#[test]
fn batch_applies_valid_records_past_a_malformed_one() {
    let store = MemStorage::new();
    let batch = vec![
        MetricRecord::counter("a", 1),
        MetricRecord::gauge("b", 2.0),
        MetricRecord::gauge("", 3.0), // malformed, must not block the others
    ];
    let outcome = apply_batch(&store, &batch);
    assert!(!outcome.all_applied());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(store.value(MetricKind::Counter, "a").unwrap(), "1");
    assert_eq!(store.value(MetricKind::Gauge, "b").unwrap(), "2");
}

#[test]
fn batch_read_back_reflects_accumulation() {
    let store = MemStorage::new();
    store.update_counter("a", 10);
    let outcome = apply_batch(
        &store,
        &[
            MetricRecord::counter("a", 1),
            MetricRecord::gauge("b", 2.0),
        ],
    );
    assert!(outcome.all_applied());
    let a = outcome.records.iter().find(|r| r.id == "a").unwrap();
    assert_eq!(a.delta, Some(11));
    let b = outcome.records.iter().find(|r| r.id == "b").unwrap();
    assert_eq!(b.value, Some(2.0));
}

#[test]
fn empty_batch_is_a_clean_no_op() {
    let store = MemStorage::new();
    let outcome = apply_batch(&store, &[]);
    assert!(outcome.all_applied());
    assert!(outcome.records.is_empty());
}
