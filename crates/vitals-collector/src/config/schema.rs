use serde::Deserialize;
use vitals_core::error::{Result, VitalsError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    pub version: u32,

    #[serde(default)]
    pub collector: CollectorSection,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            collector: CollectorSection::default(),
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VitalsError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.collector.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for CollectorSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl CollectorSection {
    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<std::net::SocketAddr>()
            .map_err(|e| {
                VitalsError::BadRequest(format!(
                    "collector.listen must be a socket address: {e}"
                ))
            })
            .map(|_| ())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
