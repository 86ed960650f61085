//! Collkit Configuration
//!
//! Handles parsing and management of collkit.toml configuration files.
//!
//! ```toml
//! [compat]
//! reduce_mode = "faithful"
//! memo_policy = "first_non_null"
//! delay_forwarding = "legacy"
//!
//! [scheduler]
//! thread_name = "collkit-timer"
//! idle_poll_ms = 1000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::ops::ReduceMode;
use crate::runtime::ForwardMode;
use crate::wrap::MemoPolicy;

/// File name searched for by [`CollkitConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "collkit.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching collkit.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollkitConfig {
    /// Which legacy quirks to reproduce
    #[serde(default)]
    pub compat: CompatConfig,

    /// Deferred-call worker settings
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl CollkitConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: CollkitConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded collkit config");
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    ///
    /// Falls back to [`CollkitConfig::default`] when no file exists.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                return Ok(Self::default());
            }
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Switches between legacy-faithful and corrected behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompatConfig {
    /// Accumulator handling in `reduce_with`
    #[serde(default)]
    pub reduce_mode: ReduceMode,

    /// Cache strategy for `Memoize`
    #[serde(default)]
    pub memo_policy: MemoPolicy,

    /// Argument forwarding for `delay`
    #[serde(default)]
    pub delay_forwarding: ForwardMode,
}

/// Scheduler worker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Name given to the worker thread
    #[serde(default = "default_thread_name")]
    pub thread_name: String,

    /// How long the worker waits for new work when nothing is queued
    #[serde(default = "default_idle_poll_ms")]
    pub idle_poll_ms: u64,
}

fn default_thread_name() -> String {
    "collkit-timer".to_string()
}

fn default_idle_poll_ms() -> u64 {
    1000
}

impl SchedulerConfig {
    pub fn idle_poll(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms.max(1))
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            thread_name: default_thread_name(),
            idle_poll_ms: default_idle_poll_ms(),
        }
    }
}
