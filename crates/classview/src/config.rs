/// Server configuration, loaded from a JSON file.
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_schedule_source() -> String {
    "data/class_schedules.json".to_string()
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind address for the HTTP server
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Where to load the schedule JSON from at startup: a filesystem path or
    /// an http(s) URL.
    #[serde(default = "default_schedule_source")]
    pub schedule_source: String,
}

impl AppConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the config file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` - Parsed configuration with defaults filled in
    /// * `Err` - If the file is missing or not valid JSON
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            schedule_source: default_schedule_source(),
        }
    }
}
