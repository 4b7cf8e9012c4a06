use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::operation::DEFAULT_MAX_ATTEMPTS;

/// Defaults for insistent runs (`[insist]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsistConfig {
    /// Maximum number of calls.
    pub tries: u32,
    /// Count errors as failed tries instead of aborting.
    pub catch_exceptions: bool,
    /// Wait between tries in milliseconds.
    pub interval_ms: u64,
}

impl Default for InsistConfig {
    fn default() -> Self {
        Self {
            tries: 1,
            catch_exceptions: false,
            interval_ms: 0,
        }
    }
}

impl InsistConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Global configuration loaded from `~/.config/pollops/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Attempts per operation, including the first.
    pub max_attempts: u32,
    /// Wait between attempts in milliseconds.
    pub attempts_interval_ms: u64,
    pub insist: InsistConfig,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempts_interval_ms: 0,
            insist: InsistConfig::default(),
        }
    }
}

impl PollConfig {
    pub fn attempts_interval(&self) -> Duration {
        Duration::from_millis(self.attempts_interval_ms)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the runners would refuse anyway.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.insist.tries == 0 {
            return Err(ConfigError::ZeroTries);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pollops")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PollConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PollConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<PollConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    let cfg: PollConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
