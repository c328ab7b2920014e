//! Agent control loop: two fixed-interval timers multiplexed on one task.
//!
//! The staged metric table is owned by this task alone; poll and report
//! ticks never overlap, so no lock guards it. A concurrent sampling source
//! added later must bring its own protection.

use std::collections::HashMap;

use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use vitals_core::error::Result;
use vitals_core::MetricRecord;

use crate::config::AgentConfig;
use crate::reporter::Reporter;
use crate::sampler::{Sampler, POLL_COUNT};

/// A report failure past this many consecutive misses is fatal.
const MAX_REPORT_FAILURES: u32 = 3;

pub struct Agent {
    cfg: AgentConfig,
    sampler: Sampler,
    reporter: Reporter,
    table: HashMap<String, MetricRecord>,
}

impl Agent {
    pub fn new(cfg: AgentConfig) -> Self {
        let reporter = Reporter::new(cfg.agent.updates_url());
        Self {
            cfg,
            sampler: Sampler::new(),
            reporter,
            table: HashMap::new(),
        }
    }

    /// Stage one poll: overwrite the gauge set, bump the poll counter delta.
    fn poll(&mut self) {
        for record in self.sampler.sample() {
            self.table.insert(record.id.clone(), record);
        }
        let entry = self
            .table
            .entry(POLL_COUNT.to_string())
            .or_insert_with(|| MetricRecord::counter(POLL_COUNT, 0));
        entry.delta = Some(entry.delta.unwrap_or(0).wrapping_add(1));
        debug!(staged = self.table.len(), "poll tick");
    }

    /// Run until the report failure budget is exhausted.
    ///
    /// Both timers fire first after one full period (not immediately), and
    /// the spacing between report attempts is always the report interval —
    /// no backoff.
    pub async fn run(mut self) -> Result<()> {
        let poll_every = Duration::from_millis(self.cfg.agent.poll_interval_ms);
        let report_every = Duration::from_millis(self.cfg.agent.report_interval_ms);

        let mut poll_tick = interval_at(Instant::now() + poll_every, poll_every);
        poll_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut report_tick = interval_at(Instant::now() + report_every, report_every);
        report_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            collector = %self.cfg.agent.collector_addr,
            poll_ms = self.cfg.agent.poll_interval_ms,
            report_ms = self.cfg.agent.report_interval_ms,
            "agent loop starting"
        );

        let mut failures: u32 = 0;
        loop {
            tokio::select! {
                _ = poll_tick.tick() => {
                    self.poll();
                }
                _ = report_tick.tick() => {
                    let batch: Vec<MetricRecord> = self.table.values().cloned().collect();
                    match self.reporter.send_batch(&batch).await {
                        Ok(()) => {
                            failures = 0;
                            // The collector has absorbed the staged polls.
                            if let Some(entry) = self.table.get_mut(POLL_COUNT) {
                                entry.delta = Some(0);
                            }
                        }
                        Err(err) => {
                            failures += 1;
                            warn!(%err, failures, "report failed");
                            if failures > MAX_REPORT_FAILURES {
                                return Err(err);
                            }
                        }
                    }
                }
            }
        }
    }
}
