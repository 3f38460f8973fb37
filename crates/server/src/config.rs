//! Server configuration read from the environment.

use pressbody_core::FetchConfig;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Listen port (`PORT`).
    pub port: u16,
    /// Upstream request timeout in seconds (`FETCH_TIMEOUT_SECS`). Unset means none.
    pub fetch_timeout: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT, fetch_timeout: None }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `FETCH_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    ///
    /// Empty values count as unset. Unparsable values are logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "invalid PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let fetch_timeout = get("FETCH_TIMEOUT_SECS").and_then(|raw| match raw.parse::<u64>() {
            Ok(0) | Err(_) => {
                warn!(value = %raw, "invalid FETCH_TIMEOUT_SECS, leaving upstream requests without a timeout");
                None
            }
            Ok(secs) => Some(secs),
        });

        Self { host: get("HOST").unwrap_or(defaults.host), port, fetch_timeout }
    }

    /// Fetcher settings derived from this config.
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig { timeout: self.fetch_timeout, ..Default::default() }
    }
}
