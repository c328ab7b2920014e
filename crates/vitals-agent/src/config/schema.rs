use serde::Deserialize;
use vitals_core::error::{Result, VitalsError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub agent: AgentSection,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            version: 1,
            agent: AgentSection::default(),
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VitalsError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.agent.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSection {
    #[serde(default = "default_collector_addr")]
    pub collector_addr: String,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            collector_addr: default_collector_addr(),
            poll_interval_ms: default_poll_interval_ms(),
            report_interval_ms: default_report_interval_ms(),
        }
    }
}

impl AgentSection {
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms < 100 {
            return Err(VitalsError::BadRequest(
                "agent.poll_interval_ms must be at least 100".into(),
            ));
        }
        if self.report_interval_ms < self.poll_interval_ms {
            return Err(VitalsError::BadRequest(
                "agent.report_interval_ms must not be shorter than poll_interval_ms".into(),
            ));
        }
        Ok(())
    }

    /// Base URL of the collector's update endpoint.
    pub fn updates_url(&self) -> String {
        format!("http://{}/updates", self.collector_addr)
    }
}

fn default_collector_addr() -> String {
    "127.0.0.1:8080".into()
}
fn default_poll_interval_ms() -> u64 {
    2000
}
fn default_report_interval_ms() -> u64 {
    10000
}
