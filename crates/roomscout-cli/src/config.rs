//! Configuration loading.
//!
//! Everything that survives between runs lives in one TOML file: the backend
//! address, the primary account identity and the directory prefixes that
//! identify room resources. Credentials are prompted interactively and never
//! written to disk.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use slot_engine::{DEFAULT_INCREMENT_MINUTES, DEFAULT_MIN_CAPACITY};

use crate::error::RoomscoutError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the calendar backend API.
    pub server_url: String,
    /// Mailbox of the meeting organizer.
    pub primary_email: String,
    /// Directory name prefixes identifying room resources, e.g. one per floor.
    pub room_prefixes: Vec<String>,
    /// Capacity floor for bookable rooms.
    #[serde(default = "default_min_capacity")]
    pub min_room_capacity: u32,
    /// Step between candidate slot start times, in minutes.
    #[serde(default = "default_increment")]
    pub increment_minutes: i64,
    /// Free/busy queries cover the business day from this hour...
    #[serde(default = "default_day_start")]
    pub day_start_hour: u32,
    /// ...to this hour.
    #[serde(default = "default_day_end")]
    pub day_end_hour: u32,
}

fn default_min_capacity() -> u32 {
    DEFAULT_MIN_CAPACITY
}

fn default_increment() -> i64 {
    DEFAULT_INCREMENT_MINUTES
}

fn default_day_start() -> u32 {
    6
}

fn default_day_end() -> u32 {
    21
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("roomscout").join("config.toml"));
    }
    paths.push(PathBuf::from("roomscout.toml"));
    paths
}

impl Config {
    /// Load the config from an explicit path, or from the first of
    /// `$XDG_CONFIG_HOME/roomscout/config.toml` and `./roomscout.toml` that
    /// exists. A missing or unparseable file is fatal.
    pub fn load(explicit: Option<&Path>) -> Result<Self, RoomscoutError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => default_config_paths()
                .into_iter()
                .find(|p| p.exists())
                .ok_or(RoomscoutError::ConfigNotFound)?,
        };

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), RoomscoutError> {
        if self.room_prefixes.is_empty() {
            return Err(RoomscoutError::InvalidConfig(
                "room_prefixes must not be empty".to_string(),
            ));
        }
        if self.day_end_hour > 23 || self.day_start_hour >= self.day_end_hour {
            return Err(RoomscoutError::InvalidConfig(format!(
                "business day hours {}..{} are not a valid range",
                self.day_start_hour, self.day_end_hour
            )));
        }
        if self.increment_minutes <= 0 {
            return Err(RoomscoutError::InvalidConfig(
                "increment_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
