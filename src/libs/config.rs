//! Configuration management for shiftclock.
//!
//! Settings live in `config.json` inside the per-OS data directory resolved by
//! [`DataStorage`]. A missing file is not an error: [`Config::read`] falls back
//! to defaults so the tool runs without any setup.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use shiftclock::libs::config::Config;
//!
//! let config = Config::read()?;
//! let punch = config.punch.unwrap_or_default();
//! println!("lock timeout: {} ms", punch.lock_timeout_ms);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Punch engine settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PunchConfig {
    /// How long a punch waits for the per employee-day lock, in milliseconds.
    ///
    /// A punch that cannot get the lock in time is rejected and records
    /// nothing.
    pub lock_timeout_ms: u64,

    /// Reject a start that would leave both slots of the day in the morning.
    ///
    /// When false such records are kept and shown chronologically.
    #[serde(default)]
    pub reject_ambiguous: bool,
}

impl PunchConfig {
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }
}

impl Default for PunchConfig {
    fn default() -> Self {
        PunchConfig {
            lock_timeout_ms: 2000,
            reject_ambiguous: false,
        }
    }
}

/// Root configuration object. Every section is optional.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punch: Option<PunchConfig>,

    /// Overrides the database file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Writes a configuration with every section filled with defaults,
    /// keeping sections that are already configured.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        config.punch.get_or_insert_with(PunchConfig::default);
        config.save()?;
        Ok(config)
    }
}
