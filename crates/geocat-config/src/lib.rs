//! Configuration for the geocat CLI.
//!
//! A TOML file under the platform config directory, overridable with
//! `GEOCAT_`-prefixed environment variables and CLI flags layered on
//! top by the binary.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Backend base URL; the client appends `/api/...` to it.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Email identifying the admin session.
    pub email: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Default output format: "table", "json", "yaml", or "plain".
    #[serde(default = "default_output")]
    pub output: String,

    /// Snapshot cache directory; platform cache dir when unset.
    pub cache_dir: Option<PathBuf>,

    /// Disable the snapshot cache entirely.
    #[serde(default)]
    pub no_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            email: None,
            timeout: default_timeout(),
            output: default_output(),
            cache_dir: None,
            no_cache: false,
        }
    }
}

fn default_backend() -> String {
    "http://localhost:5000".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}

impl Config {
    /// Parse and validate the backend base URL.
    pub fn backend_url(&self) -> Result<url::Url, ConfigError> {
        self.backend.parse().map_err(|_| ConfigError::Validation {
            field: "backend".into(),
            reason: format!("invalid URL: {}", self.backend),
        })
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// The snapshot cache directory, or `None` when caching is off.
    pub fn snapshot_dir(&self) -> Option<PathBuf> {
        if self.no_cache {
            return None;
        }
        self.cache_dir.clone().or_else(|| {
            ProjectDirs::from("com", "geocat", "geocat").map(|dirs| dirs.cache_dir().to_path_buf())
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "geocat", "geocat").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("geocat");
    p
}

// ── Loading and saving ──────────────────────────────────────────────

/// Load the config from defaults, the TOML file, and `GEOCAT_` env vars.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("GEOCAT_"));

    Ok(figment.extract()?)
}

/// Load config, falling back to defaults when nothing is readable.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize the config to TOML at the canonical path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, toml::to_string_pretty(cfg)?)?;
    Ok(())
}
