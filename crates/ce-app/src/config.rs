//! Dashboard configuration, loaded from YAML.
//!
//! ```yaml
//! api:
//!   base_url: http://127.0.0.1:8000/api
//!   timeout_secs: 30
//! upload_failure: reset_and_reload
//! ```

use std::path::Path;
use std::time::Duration;

use ce_client::Endpoints;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. Absent means wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Endpoints::DEFAULT_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// What a failed CSV submission does to the rest of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadFailurePolicy {
    /// Clear selection and summary and reload the uploads list, exactly as a
    /// successful submission does.
    #[default]
    ResetAndReload,
    /// Leave selection and fetched data untouched; only the pending file is
    /// cleared.
    KeepState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub upload_failure: UploadFailurePolicy,
}

/// Load configuration from a YAML file.
pub fn load_config(path: &Path) -> AppResult<DashboardConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&content).map_err(|message| AppError::ConfigParse {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_config(content: &str) -> Result<DashboardConfig, String> {
    if content.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}
