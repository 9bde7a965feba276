//! `AppConfig` struct, TOML loading and the TMDB credential.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Environment variable holding the TMDB API read access token.
pub const TOKEN_ENV: &str = "TMDB_READ_ACCESS_TOKEN";

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream TMDB settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// Listen address configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host or IP to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream TMDB configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-call timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TmdbConfig {
    /// Per-call timeout, or `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

fn default_host() -> String {
    String::from("127.0.0.1")
}

const fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    String::from("https://api.themoviedb.org/3/")
}

const fn default_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Applies command-line overrides for the listen address.
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

/// Reads the TMDB credential from [`TOKEN_ENV`].
///
/// # Errors
///
/// Returns an error if the variable is unset or blank.
pub fn read_api_token() -> Result<String> {
    api_token_from(std::env::var(TOKEN_ENV).ok())
}

/// Validates a raw credential value.
///
/// # Errors
///
/// Returns an error if `value` is `None` or blank.
pub fn api_token_from(value: Option<String>) -> Result<String> {
    match value.map(|v| String::from(v.trim())) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => bail!("{TOKEN_ENV} environment variable is required"),
    }
}
