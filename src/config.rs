use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Where the one-time seed batch comes from and how much of it to keep.
///
/// Every field has a default, so a config file only names what it changes:
///
/// ```text
/// {"url": "http://localhost:8080/comments", "batch_size": 5}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Endpoint returning a JSON array of records with `email` and `body`.
    pub url: String,

    /// How many records become entries. Extra records are ignored.
    pub batch_size: usize,

    /// Request timeout for the seed fetch, in seconds.
    pub timeout_secs: u64,
}

impl SeedConfig {
    pub const DEFAULT_URL: &'static str = "https://jsonplaceholder.typicode.com/comments";
    pub const DEFAULT_BATCH_SIZE: usize = 20;
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub const URL_VAR: &'static str = "DIARYFOLD_SEED_URL";
    pub const BATCH_VAR: &'static str = "DIARYFOLD_SEED_BATCH";
    pub const TIMEOUT_VAR: &'static str = "DIARYFOLD_SEED_TIMEOUT_SECS";

    /// Load a JSON config file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config object.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Overlay `DIARYFOLD_SEED_URL`, `DIARYFOLD_SEED_BATCH` and
    /// `DIARYFOLD_SEED_TIMEOUT_SECS` when they are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a numeric variable does not parse.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Same as [`with_env_overrides`](SeedConfig::with_env_overrides) with a
    /// custom variable lookup.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(Self::URL_VAR) {
            self.url = url;
        }
        if let Some(raw) = lookup(Self::BATCH_VAR) {
            self.batch_size = parse_var(Self::BATCH_VAR, raw)?;
        }
        if let Some(raw) = lookup(Self::TIMEOUT_VAR) {
            self.timeout_secs = parse_var(Self::TIMEOUT_VAR, raw)?;
        }
        Ok(self)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            url: Self::DEFAULT_URL.to_string(),
            batch_size: Self::DEFAULT_BATCH_SIZE,
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}
