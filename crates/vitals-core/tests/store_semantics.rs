//! Merge-semantics tests for the aggregation store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vitals_core::{MemStorage, MetricKind, Storage, VitalsError};

#[test]
fn counter_accumulates() {
    let store = MemStorage::new();
    store.update_counter("requests", 5);
    store.update_counter("requests", 3);
    assert_eq!(store.value(MetricKind::Counter, "requests").unwrap(), "8");
}

#[test]
fn counter_sum_is_order_independent() {
    let a = MemStorage::new();
    let b = MemStorage::new();
    let deltas = [7, -2, 100, 1, -40];
    for d in deltas {
        a.update_counter("x", d);
    }
    for d in deltas.iter().rev() {
        b.update_counter("x", *d);
    }
    assert_eq!(
        a.value(MetricKind::Counter, "x").unwrap(),
        b.value(MetricKind::Counter, "x").unwrap()
    );
}

#[test]
fn counter_overflow_wraps() {
    let store = MemStorage::new();
    store.update_counter("big", i64::MAX);
    let total = store.update_counter("big", 1);
    assert_eq!(total, i64::MIN);
}

#[test]
fn gauge_last_write_wins() {
    let store = MemStorage::new();
    store.update_gauge("heap", 120.5);
    store.update_gauge("heap", 98.25);
    assert_eq!(store.value(MetricKind::Gauge, "heap").unwrap(), "98.25");
}

#[test]
fn gauge_rendering_drops_superfluous_zeros() {
    let store = MemStorage::new();
    store.update_gauge("ratio", 2.0);
    assert_eq!(store.value(MetricKind::Gauge, "ratio").unwrap(), "2");
}

#[test]
fn unknown_metric_is_not_found() {
    let store = MemStorage::new();
    assert!(matches!(
        store.value(MetricKind::Counter, "nope"),
        Err(VitalsError::NotFound)
    ));
    assert!(store.record(MetricKind::Gauge, "nope").is_none());
    assert!(store.record_for_id("nope").is_none());
}

#[test]
fn same_id_across_kinds_stays_separate() {
    let store = MemStorage::new();
    store.update_counter("load", 3);
    store.update_gauge("load", 0.5);
    assert_eq!(store.value(MetricKind::Counter, "load").unwrap(), "3");
    assert_eq!(store.value(MetricKind::Gauge, "load").unwrap(), "0.5");
    // Kind-agnostic lookup resolves to the counter entry.
    let rec = store.record_for_id("load").unwrap();
    assert_eq!(rec.kind, MetricKind::Counter);
    assert_eq!(rec.delta, Some(3));
}

#[test]
fn render_lists_both_sections() {
    let store = MemStorage::new();
    store.update_counter("polls", 2);
    store.update_gauge("heap", 1.5);
    store.update_gauge("cpu", 0.25);
    let dump = store.render();
    // Iteration order is arbitrary; assert membership only.
    assert!(dump.contains("[counters]"));
    assert!(dump.contains("[gauges]"));
    assert!(dump.contains("polls: 2"));
    assert!(dump.contains("heap: 1.5"));
    assert!(dump.contains("cpu: 0.25"));
}

#[test]
fn concurrent_counter_writers_preserve_the_sum() {
    use std::sync::Arc;

    let store = Arc::new(MemStorage::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            for _ in 0..1000 {
                store.update_counter("hits", 1);
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.value(MetricKind::Counter, "hits").unwrap(), "8000");
}
