//! Configuration management for trailer-sync
//!
//! Config stored at: ~/.config/trailer-sync/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use trailer_infra::vpic_client::{DEFAULT_API_URL, MAX_BATCH_SIZE};
use trailer_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV file with a `VIN` column
    #[serde(default = "default_input_csv")]
    pub input_csv: PathBuf,

    /// vPIC batch decode endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Spreadsheet written on every successful run
    #[serde(default = "default_spreadsheet_path")]
    pub spreadsheet_path: PathBuf,

    /// VINs per decode request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Request timeout in seconds. None or 0 waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_input_csv() -> PathBuf {
    PathBuf::from("vin_list.csv")
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_database_path() -> PathBuf {
    PathBuf::from("trailers.db")
}

fn default_spreadsheet_path() -> PathBuf {
    PathBuf::from("trailers.xlsx")
}

fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_csv: default_input_csv(),
            api_url: default_api_url(),
            database_path: default_database_path(),
            spreadsheet_path: default_spreadsheet_path(),
            batch_size: default_batch_size(),
            request_timeout_secs: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("trailer-sync");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "batch_size",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Request timeout as a Duration. 0 means no timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Trailer Sync Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Input CSV:      {}", self.input_csv.display())?;
        writeln!(f, "API URL:        {}", self.api_url)?;
        writeln!(f, "Database:       {}", self.database_path.display())?;
        writeln!(f, "Spreadsheet:    {}", self.spreadsheet_path.display())?;
        writeln!(f, "Batch size:     {}", self.batch_size)?;
        match self.request_timeout() {
            Some(timeout) => writeln!(f, "Timeout:        {}s", timeout.as_secs())?,
            None => writeln!(f, "Timeout:        (none)")?,
        }
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
