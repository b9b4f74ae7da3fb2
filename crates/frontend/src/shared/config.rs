//! Client configuration
//!
//! The configuration is embedded in the bundle as TOML and parsed once.
//! A parse failure falls back to the built-in defaults.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend port on the same host as the page
    pub port: u16,
    /// Path prefix of every REST resource
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of a full-collection cache entry
    pub ttl_secs: u64,
    /// Prefix of the localStorage keys
    pub key_prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ListConfig {
    /// Minimum search term length sent to the server (0 = any)
    pub search_min_chars: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            prefix: "/api".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 5 * 60,
            key_prefix: "paged_cache:".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache.ttl_secs.min(MAX_TTL_SECS) as i64)
    }
}

const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8000
prefix = "/api"

[cache]
ttl_secs = 300
key_prefix = "paged_cache:"

[list]
search_min_chars = 0
"#;

static CONFIG: Lazy<ClientConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid embedded configuration, using defaults: {}", e);
        ClientConfig::default()
    }
});

/// Parse the embedded configuration
pub fn load_config() -> anyhow::Result<ClientConfig> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<ClientConfig> {
    let config: ClientConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Process-wide configuration
pub fn config() -> &'static ClientConfig {
    &CONFIG
}
