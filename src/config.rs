//! User configuration loaded from `~/.contacts-browser/config.yaml`
//!
//! Every key is optional. A missing file means defaults; a file that exists
//! but cannot be read or parsed is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_BASE_URL,
    DEFAULT_DETAIL_DELAY_MS, DEFAULT_LOG_FILE, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::network::DetailSettings;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    pub delay_ms: u64,
    /// 0.0 always succeeds; 0.5 is a coin flip
    pub failure_rate: f64,
}

impl Default for DetailConfig {
    fn default() -> Self {
        DetailConfig {
            delay_ms: DEFAULT_DETAIL_DELAY_MS,
            failure_rate: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub detail: DetailConfig,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            detail: DetailConfig::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load from `$CONTACTS_BROWSER_CONFIG`, falling back to the default path
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_path);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.detail.failure_rate) {
            bail!(
                "detail.failure_rate must be between 0 and 1, got {}",
                self.detail.failure_rate
            );
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than 0");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn detail_settings(&self) -> DetailSettings {
        DetailSettings {
            delay: Duration::from_millis(self.detail.delay_ms),
            failure_rate: self.detail.failure_rate,
        }
    }
}

/// `~/.contacts-browser/config.yaml`, or relative to `.` without a home directory
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.detail_settings().delay, Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: http://localhost:3000\ndetail:\n  failure_rate: 0.5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.detail.failure_rate, 0.5);
        assert_eq!(config.detail.delay_ms, 500);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_out_of_range_failure_rate_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "detail:\n  failure_rate: 2.0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "request_timeout_secs: [1, 2]\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn test_default_path_ends_with_config_file() {
        assert!(default_path().ends_with(".contacts-browser/config.yaml"));
    }
}
