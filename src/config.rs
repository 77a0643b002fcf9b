//! Defaults and environment overrides.
//!
//! Environment variables may also come from a `.env` file, loaded by
//! [`Config::from_env`] through `dotenv`.

use std::error::Error;
use std::time::Duration;

pub const DEFAULT_LIST_FILE: &str = "merge.list";
pub const DEFAULT_SET_NAME: &str = "netlist";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub const ENV_LOG_CONFIG: &str = "CIDR_MERGE_LOG_CONFIG";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CIDR_MERGE_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log4rs YAML file.
    pub log_config: String,
    /// Whole-request timeout for URL sources.
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read overrides from the environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unusable values keep the default.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Config {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = path.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.http_timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "Ignoring {ENV_HTTP_TIMEOUT_SECS}='{raw}', using {DEFAULT_HTTP_TIMEOUT_SECS}s"
                ),
            }
        }

        config
    }

    /// HTTP client for URL sources, honouring the configured timeout.
    pub fn http_client(&self) -> Result<reqwest::Client, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()
            .map_err(|e| format!("Error building HTTP client: {e}"))?;
        Ok(client)
    }
}
