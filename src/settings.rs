// src/settings.rs
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Runtime settings. Every field has a working default so the app runs
/// with no config file at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the analysis endpoint.
    pub api_base_url: String,
    /// Region preselected in the credentials form.
    pub default_region: String,
    /// Per-request timeout for endpoint calls.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            default_region: "us-east-1".to_string(),
            request_timeout_secs: 60,
        }
    }
}

impl Settings {
    /// Load the user config file, then apply CLOUDOPTIMIZER_* environment
    /// overrides. A missing file is not an error.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = Self::config_file() {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let config = builder
            .add_source(config::Environment::with_prefix("CLOUDOPTIMIZER"))
            .build()?;

        config.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cloudoptimizer").join("config.toml"))
    }
}
