//! Configuration file parser for ~/.config/shopnav/config.toml.
//!
//! The config file is optional: a missing file yields `Config::default()`.
//! Unknown keys are accepted by serde but logged as warnings, since they are
//! usually typos. `SHOPNAV_API_URL` overrides `api_base_url` from the file.
use crate::nav::Role;
use crate::theme::ThemeVariant;
use crate::util::{validate_base_url, BaseUrlError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "SHOPNAV_API_URL";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("Invalid api_base_url: {0}")]
    BaseUrl(#[from] BaseUrlError),

    #[error("Unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

// ============================================================================
// Configuration
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be given.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root URL of the shop backend.
    pub api_base_url: String,

    /// Timeout for the category request, in seconds.
    pub request_timeout_secs: u64,

    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Brand text shown next to the logo.
    pub brand: String,

    /// Role used for the role navigation block.
    pub role: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
            theme: "dark".to_string(),
            brand: "Multi-Vendor Shop".to_string(),
            role: "guest".to_string(),
        }
    }
}

const KNOWN_KEYS: [&str; 5] = [
    "api_base_url",
    "request_timeout_secs",
    "theme",
    "brand",
    "role",
];

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content).inspect(|config| {
            tracing::info!(
                path = %path.display(),
                api_base_url = %config.api_base_url,
                "Loaded configuration"
            );
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        Ok(toml::from_str(content)?)
    }

    /// Apply the `SHOPNAV_API_URL` override when set and non-empty.
    pub fn apply_env(&mut self) {
        self.apply_api_url_override(std::env::var(API_URL_ENV).ok());
    }

    fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!(api_base_url = %url, "Using {} override", API_URL_ENV);
            self.api_base_url = url;
        }
    }

    /// Validated backend base URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Ok(validate_base_url(&self.api_base_url)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn theme_variant(&self) -> Result<ThemeVariant, ConfigError> {
        ThemeVariant::from_str_name(&self.theme).ok_or_else(|| ConfigError::UnknownValue {
            field: "theme",
            value: self.theme.clone(),
        })
    }

    pub fn role(&self) -> Result<Role, ConfigError> {
        Role::from_str_name(&self.role).ok_or_else(|| ConfigError::UnknownValue {
            field: "role",
            value: self.role.clone(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
