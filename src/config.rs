//! Configuration loading.
//!
//! Loads from `./anteroom.toml` (or `$ANTEROOM_CONFIG_PATH`); environment
//! variables override file values, file values override defaults. A missing
//! file is not an error, the defaults point at a local backend.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnteroomConfig {
    /// Backend connection settings (`[backend]`).
    pub backend: BackendConfig,
    /// Filesystem paths (`[paths]`).
    pub paths: PathsConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the REST backend.
    pub base_url: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// How many records a listing fetch asks for.
    pub page_size: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_owned(),
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
            page_size: 50,
        }
    }
}

/// Filesystem paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory for rotated JSON log files.
    pub logs_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            logs_dir: "./logs".to_owned(),
        }
    }
}

impl AnteroomConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// # Errors
    ///
    /// Fails when the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        let mut config = Self::load_from_path(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from a TOML file only, no env overrides. A missing file yields
    /// defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                let config: AnteroomConfig =
                    toml::from_str(&contents).context("failed to parse config TOML")?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read config file: {e}")),
        }
    }

    /// Resolve the config file path using the given env resolver.
    pub fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        match env("ANTEROOM_CONFIG_PATH") {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from("anteroom.toml"),
        }
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function so tests can inject values without
    /// mutating the process environment. Invalid numeric overrides are
    /// logged and ignored, never fatal.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("ANTEROOM_API_URL") {
            self.backend.base_url = v;
        }
        if let Some(v) = env("ANTEROOM_PAGE_SIZE") {
            match v.parse() {
                Ok(n) => self.backend.page_size = n,
                Err(_) => tracing::warn!(
                    var = "ANTEROOM_PAGE_SIZE",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("ANTEROOM_LOGS_DIR") {
            self.paths.logs_dir = v;
        }
    }
}
