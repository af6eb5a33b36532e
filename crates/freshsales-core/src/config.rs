//! Configuration management for the Freshsales client

use serde::{Deserialize, Serialize};
use crate::error::{FreshsalesError, Result};

const DOMAIN_VAR: &str = "FRESHSALES_DOMAIN";
const API_KEY_VAR: &str = "FRESHSALES_API_KEY";
const BASE_URL_VAR: &str = "FRESHSALES_BASE_URL";
const TIMEOUT_VAR: &str = "FRESHSALES_TIMEOUT_SECS";

/// Connection settings for one Freshsales account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreshsalesConfig {
    /// Account subdomain, i.e. `acme` for `acme.freshsales.io`
    pub domain: String,

    #[serde(alias = "token")]  // Accept both 'api_key' and 'token'
    pub api_key: String,

    /// Overrides `https://{domain}.freshsales.io/api`
    #[serde(default, alias = "url")]
    pub base_url: Option<String>,

    /// Per-request timeout; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl FreshsalesConfig {
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            api_key: api_key.into(),
            base_url: None,
            timeout_secs: None,
        }
    }

    /// Point the client at a different API root (e.g. a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FreshsalesError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `FRESHSALES_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| FreshsalesError::Config(format!("{} is required", key)))
        };

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                FreshsalesError::Config(format!("{} must be a number of seconds: {}", TIMEOUT_VAR, e))
            })?),
            None => None,
        };

        let config = Self {
            domain: required(DOMAIN_VAR)?,
            api_key: required(API_KEY_VAR)?,
            base_url: lookup(BASE_URL_VAR),
            timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.domain.trim().is_empty() && self.base_url.is_none() {
            return Err(FreshsalesError::Config("Freshsales domain is required".to_string()));
        }

        if self.api_key.trim().is_empty() {
            return Err(FreshsalesError::Config("Freshsales API key is required".to_string()));
        }

        Ok(())
    }

    /// Root every request path is appended to
    pub fn api_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.freshsales.io/api", self.domain.trim()),
        }
    }
}
