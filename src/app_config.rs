use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::database::SchemaVersion;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the Pathfinder SQLite database
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Major database version this application works with
    #[serde(default = "default_required_major_version")]
    pub required_major_version: u32,

    /// Minimum minor database version this application works with
    #[serde(default = "default_min_minor_version")]
    pub min_minor_version: u32,

    /// Output format for lookup results
    #[serde(default)]
    pub output: OutputFormat,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            required_major_version: default_required_major_version(),
            min_minor_version: default_min_minor_version(),
            output: OutputFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// How lookup results are printed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Database shipped next to the application
const LOCAL_DATABASE_PATH: &str = "data/pathfinder.sqlite";

/// Directory under the user's data directory
const DATA_DIRNAME: &str = "decemvirate";

const DATABASE_FILENAME: &str = "pathfinder.sqlite";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "decemvirate.json";

fn default_database_path() -> PathBuf {
    let local = PathBuf::from(LOCAL_DATABASE_PATH);
    if local.exists() {
        return local;
    }

    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .map(|dir| dir.join(DATA_DIRNAME).join(DATABASE_FILENAME))
        .unwrap_or(local)
}

fn default_required_major_version() -> u32 {
    0
}

fn default_min_minor_version() -> u32 {
    8
}

impl Config {
    /// Load the configuration file, or the defaults if it doesn't exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            debug!("Config file not found at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let file = File::open(config_path)
            .with_context(|| format!("Failed to open config file: {:?}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(anyhow!("Pathfinder database path must not be empty"));
        }

        Ok(())
    }

    /// The version every opened database has to be compatible with
    pub fn required_version(&self) -> SchemaVersion {
        SchemaVersion::required(self.required_major_version, self.min_minor_version)
    }
}
