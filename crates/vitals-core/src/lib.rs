//! vitals core: metric data model, aggregation store, and update protocol.
//!
//! This crate defines the wire-level metric contract and the in-memory
//! aggregation engine shared by the collector and the agent. It intentionally
//! carries no transport or runtime dependencies so it can be reused in
//! multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `VitalsError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod store;
pub mod update;

/// Shared result type.
pub use error::{Result, VitalsError};
pub use metric::{MetricKind, MetricRecord};
pub use store::{MemStorage, Storage};
