use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use url::Url;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CardAdvise";
const APP_NAME: &str = "CardAdvise";

pub const ENDPOINT_ENV: &str = "CARD_ADVISE_ENDPOINT";
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/recommendations";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_endpoint")]
    pub recommendation_endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recommendation_endpoint: default_endpoint(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Settings {
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(self.recommendation_endpoint.trim())
            .map_err(|err| ConfigError::InvalidEndpoint(err.to_string()))
    }

    fn apply_env(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|value| !value.trim().is_empty()) {
            tracing::debug!(endpoint = %endpoint, "endpoint overridden from environment");
            self.recommendation_endpoint = endpoint;
        }
        self
    }
}

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Settings file, then environment override. Any failure falls back to defaults.
pub fn load_settings() -> Settings {
    let from_file = match settings_file() {
        Some(path) => match read_settings(&path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    from_file.apply_env(std::env::var(ENDPOINT_ENV).ok())
}

pub fn read_settings(path: &Path) -> Result<Option<Settings>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&data)?))
}

pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    let path = settings_file().ok_or(ConfigError::StorageUnavailable)?;
    write_settings(&path, settings)
}

pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error("invalid recommendation endpoint: {0}")]
    InvalidEndpoint(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
