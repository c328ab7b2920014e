//! vitals agent library entry.
//!
//! The agent samples host indicators on a poll interval, stages them in a
//! local metric table, and ships the table to the collector on a report
//! interval with a bounded retry budget.

pub mod agent;
pub mod config;
pub mod reporter;
pub mod sampler;

pub use agent::Agent;
