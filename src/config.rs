//! Application settings.
//!
//! Sources, lowest precedence first: built-in defaults, an optional `ipl_insights.toml` in the
//! working directory, then `IPL_INSIGHTS_*` environment variables
//! (e.g. `IPL_INSIGHTS_DATA_DIR=/srv/ipl`).

use crate::data::DataSources;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const CONFIG_FILE: &str = "ipl_insights";
pub const ENV_PREFIX: &str = "IPL_INSIGHTS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub matches_file: String,
    pub deliveries_file: String,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Settings {
    /// Load settings from defaults, the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
            .map_err(ConfigError::from)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(config::Config::builder()
            .set_default("data_dir", "data")?
            .set_default("matches_file", "matches.csv")?
            .set_default("deliveries_file", "deliveries.csv")?
            .set_default("log_filter", "info")?
            .set_default("window_width", 1400.0)?
            .set_default("window_height", 800.0)?)
    }

    pub fn sources(&self) -> DataSources {
        DataSources {
            matches: self.data_dir.join(&self.matches_file),
            deliveries: self.data_dir.join(&self.deliveries_file),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            matches_file: "matches.csv".to_string(),
            deliveries_file: "deliveries.csv".to_string(),
            log_filter: "info".to_string(),
            window_width: 1400.0,
            window_height: 800.0,
        }
    }
}
