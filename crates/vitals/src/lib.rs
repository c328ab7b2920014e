//! Top-level facade crate for vitals.
//!
//! Re-exports the core types, the collector, and the agent so users can
//! depend on a single crate.

pub mod core {
    pub use vitals_core::*;
}

pub mod collector {
    pub use vitals_collector::*;
}

pub mod agent {
    pub use vitals_agent::*;
}
