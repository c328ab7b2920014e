//! Host indicator sampler (poll side of the agent).
//!
//! Samples a closed set of named signals from sysinfo on every poll tick.
//! All indicators are gauges except `PollCount`, a counter whose delta
//! accumulates polls since the last successful report.

use rand::Rng;
use sysinfo::System;

use vitals_core::MetricRecord;

/// Counter id for the poll tick count.
pub const POLL_COUNT: &str = "PollCount";

/// Snapshot source over the host. Sampling is synchronous and in-process;
/// nothing here can block on I/O.
pub struct Sampler {
    system: System,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    /// Sample the gauge set. `PollCount` is staged separately by the agent.
    pub fn sample(&mut self) -> Vec<MetricRecord> {
        self.system.refresh_memory();
        self.system.refresh_cpu_usage();
        let load = System::load_average();
        let mut rng = rand::thread_rng();

        vec![
            MetricRecord::gauge("TotalMemory", self.system.total_memory() as f64),
            MetricRecord::gauge("UsedMemory", self.system.used_memory() as f64),
            MetricRecord::gauge("FreeMemory", self.system.free_memory() as f64),
            MetricRecord::gauge("AvailableMemory", self.system.available_memory() as f64),
            MetricRecord::gauge("TotalSwap", self.system.total_swap() as f64),
            MetricRecord::gauge("UsedSwap", self.system.used_swap() as f64),
            MetricRecord::gauge("CpuUtilization", self.system.global_cpu_usage() as f64),
            MetricRecord::gauge("LoadAverage1", load.one),
            MetricRecord::gauge("LoadAverage5", load.five),
            MetricRecord::gauge("LoadAverage15", load.fifteen),
            MetricRecord::gauge("Uptime", System::uptime() as f64),
            MetricRecord::gauge("RandomValue", rng.gen::<f64>()),
        ]
    }
}
