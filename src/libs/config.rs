//! Configuration management for the tms server.
//!
//! Settings are loaded from a JSON file in the platform application data
//! directory, with environment variable overrides on top. Command-line
//! flags (parsed in `main`) take precedence over both. The file is
//! optional: a missing configuration falls back to defaults suitable for
//! local development.
//!
//! ## Sources, lowest precedence first
//!
//! 1. Built-in defaults (port 4000, `development`, platform db path)
//! 2. `config.json` in the tms data directory
//! 3. `TMS_PORT`, `TMS_ENV`, `TMS_DB_PATH` environment variables
//! 4. `--port`, `--env`, `--db-path` command-line flags

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// HTTP server settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Port the API server listens on.
    pub port: u16,
    /// Environment name reported by the healthcheck endpoint.
    pub env: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            env: "development".to_string(),
        }
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Explicit database file path; when absent the platform data
    /// directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Load the configuration file, falling back to defaults when it does
    /// not exist, then apply environment variable overrides.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut config = if config_path.exists() {
            let file = File::open(&config_path)?;
            serde_json::from_reader(file).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?
        } else {
            Config::default()
        };

        if let Ok(port) = env::var("TMS_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }
        if let Ok(env_name) = env::var("TMS_ENV") {
            config.server.env = env_name;
        }
        if let Ok(db_path) = env::var("TMS_DB_PATH") {
            config.db_path = Some(PathBuf::from(db_path));
        }

        Ok(config)
    }

    /// Persist the configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&config_path).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Resolve the database file path, defaulting to the platform data
    /// directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
