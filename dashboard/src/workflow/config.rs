use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// Public launch table used by the course dashboard.
pub const DEFAULT_SOURCE: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: String,
    pub bind: SocketAddr,
    pub slider_step: f64,
    pub slider_marks: Vec<f64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 8050)),
            slider_step: 1000.0,
            slider_marks: vec![0.0, 2500.0, 5000.0, 10000.0],
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading dashboard config {}", path_ref.display()))?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing dashboard config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Command-line values win over file values.
    pub fn with_overrides(mut self, source: Option<String>, bind: Option<SocketAddr>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(bind) = bind {
            self.bind = bind;
        }
        self
    }
}
