// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_APOLLO_URL: &str = "https://api.apollo.io";
pub const DEFAULT_RAPIDAPI_HOST: &str = "fresh-linkedin-profile-data.p.rapidapi.com";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 2000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApolloConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_apollo_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSearchConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_rapidapi_host")]
    pub host: String,
    /// Defaults to `https://<host>`
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub apollo: ApolloConfig,
    #[serde(default)]
    pub profile_search: ProfileSearchConfig,
    /// Pause between company resolution and the people search, never below 2000 ms
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Option<LookupConfig>,
    production: Option<LookupConfig>,
}

fn default_apollo_url() -> String {
    DEFAULT_APOLLO_URL.to_string()
}

fn default_rapidapi_host() -> String {
    DEFAULT_RAPIDAPI_HOST.to_string()
}

fn default_request_delay_ms() -> u64 {
    DEFAULT_REQUEST_DELAY_MS
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApolloConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_apollo_url(),
        }
    }
}

impl Default for ProfileSearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            host: default_rapidapi_host(),
            base_url: None,
        }
    }
}

impl ProfileSearchConfig {
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}", self.host))
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            apollo: ApolloConfig::default(),
            profile_search: ProfileSearchConfig::default(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LookupConfig {
    /// Load `path` if it exists (section picked by environment), then apply env overrides
    pub fn load(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml(&content, &environment)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            info!("{} not found, using defaults", path.display());
            Self::default()
        };

        config
            .apply_overrides(|key| std::env::var(key).ok())?
            .validated()
    }

    fn get_environment() -> String {
        std::env::var("LEADSCOUT_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid configuration file")?;

        let config = match environment {
            "production" => config_file
                .production
                .context("No production section in configuration file")?,
            _ => config_file.local.unwrap_or_default(),
        };
        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.timeout_seconds == 0 {
            anyhow::bail!("timeout_seconds must be greater than zero");
        }
        Ok(self)
    }

    /// Override file values with environment variables resolved through `lookup`
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("APOLLO_API_KEY") {
            self.apollo.api_key = key;
        }
        if let Some(url) = lookup("APOLLO_API_URL") {
            self.apollo.base_url = url;
        }
        if let Some(key) = lookup("RAPIDAPI_KEY") {
            self.profile_search.api_key = key;
        }
        if let Some(host) = lookup("RAPIDAPI_HOST") {
            self.profile_search.host = host;
        }
        if let Some(url) = lookup("RAPIDAPI_URL") {
            self.profile_search.base_url = Some(url);
        }
        if let Some(delay) = lookup("LEADSCOUT_REQUEST_DELAY_MS") {
            self.request_delay_ms = delay
                .parse()
                .context("LEADSCOUT_REQUEST_DELAY_MS must be a number of milliseconds")?;
        }
        Ok(self)
    }

    pub fn with_apollo_api_key(mut self, key: impl Into<String>) -> Self {
        self.apollo.api_key = key.into();
        self
    }

    pub fn with_profile_search_api_key(mut self, key: impl Into<String>) -> Self {
        self.profile_search.api_key = key.into();
        self
    }

    pub fn with_request_delay_ms(mut self, delay_ms: u64) -> Self {
        self.request_delay_ms = delay_ms;
        self
    }

    /// Configured pause, raised to the 2000 ms floor
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms.max(DEFAULT_REQUEST_DELAY_MS))
    }
}
