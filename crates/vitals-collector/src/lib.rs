//! vitals collector library entry.
//!
//! This crate wires the HTTP surface around the core aggregation store: the
//! router, the request handlers, and the YAML config. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
