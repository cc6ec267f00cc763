use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// localStorage-sized default quota: 5 MiB.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `config.toml`. Every field is optional in the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Overrides every simulated network delay; `0` disables them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_latency_ms: Option<u64>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: None,
            log_level: default_log_level(),
            simulated_latency_ms: None,
        }
    }
}

impl AppConfig {
    pub fn quota_bytes(&self) -> usize {
        self.quota_bytes.unwrap_or(DEFAULT_QUOTA_BYTES)
    }
}
