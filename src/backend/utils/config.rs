use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding `auth.mode`.
pub const AUTH_MODE_ENV: &str = "GATEHOUSE_AUTH_MODE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub session_ttl_hours: u32,
}

/// Which predicate backs the access gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Every visitor counts as signed in.
    #[default]
    Disabled,
    /// A valid stored session is required.
    Session,
}

impl AuthMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "disabled" | "off" => Some(Self::Disabled),
            "session" => Some(Self::Session),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::Disabled,
            session_ttl_hours: 24 * 30,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Gatehouse".to_string(),
            width: 1280,
            height: 832,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl AppConfig {
    /// Loads the config at `path`, writing the defaults there when it does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&content)?);
        }

        let config = Self::default();
        config.save(path)?;
        debug!("Wrote default config to {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Applies `GATEHOUSE_AUTH_MODE` if set.
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var(AUTH_MODE_ENV) {
            self.apply_auth_mode_override(&value);
        }
    }

    fn apply_auth_mode_override(&mut self, value: &str) {
        match AuthMode::parse(value) {
            Some(mode) => self.auth.mode = mode,
            None => warn!("Ignoring unknown {AUTH_MODE_ENV} value: {value:?}"),
        }
    }
}
