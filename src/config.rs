//! Environment-driven HTTP settings.

use std::env;
use std::time::Duration;

pub const ENV_TIMEOUT_SECS: &str = "MAXIMO_HTTP_TIMEOUT_SECS";
pub const ENV_POOL_MAX_IDLE_PER_HOST: &str = "MAXIMO_HTTP_POOL_MAX_IDLE_PER_HOST";
pub const ENV_POOL_IDLE_TIMEOUT_SECS: &str = "MAXIMO_HTTP_POOL_IDLE_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "MAXIMO_PROXY_URL";
pub const ENV_API_KEY: &str = "MAXIMO_API_KEY";

/// Settings for the production HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub proxy_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            proxy_url: None,
        }
    }
}

impl HttpConfig {
    /// Defaults, overridden by any `MAXIMO_HTTP_*` / `MAXIMO_PROXY_URL` variables set.
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_u64 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        Self {
            timeout: parse_u64(ENV_TIMEOUT_SECS)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            pool_max_idle_per_host: lookup(ENV_POOL_MAX_IDLE_PER_HOST)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(defaults.pool_max_idle_per_host),
            pool_idle_timeout: parse_u64(ENV_POOL_IDLE_TIMEOUT_SECS)
                .map(Duration::from_secs)
                .unwrap_or(defaults.pool_idle_timeout),
            proxy_url: lookup(ENV_PROXY_URL).filter(|s| !s.trim().is_empty()),
        }
    }
}

/// API key from `MAXIMO_API_KEY`, used when an input carries none.
pub fn api_key_from_env() -> Option<String> {
    env::var(ENV_API_KEY).ok().filter(|s| !s.trim().is_empty())
}
