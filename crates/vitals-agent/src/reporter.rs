//! Batch transmitter (report side of the agent).

use tracing::debug;

use vitals_core::error::{Result, VitalsError};
use vitals_core::MetricRecord;

/// Ships staged records to the collector's batch update endpoint.
pub struct Reporter {
    client: reqwest::Client,
    updates_url: String,
}

impl Reporter {
    pub fn new(updates_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            updates_url,
        }
    }

    /// POST the batch as a JSON array. Connection failures and non-2xx
    /// statuses both count as transport failures for the retry budget.
    pub async fn send_batch(&self, records: &[MetricRecord]) -> Result<()> {
        let resp = self
            .client
            .post(&self.updates_url)
            .json(records)
            .send()
            .await
            .map_err(|e| VitalsError::Transport(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(VitalsError::Transport(format!(
                "collector returned {}",
                resp.status()
            )));
        }
        debug!(count = records.len(), "batch reported");
        Ok(())
    }
}
