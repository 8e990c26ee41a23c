use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use scripting_domain::{RuntimeConfig, DEFAULT_BASE_URL};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: 15,
            user_agent: None,
        }
    }
}

impl AppConfig {
    /// Loads the toml file named by `MARIONETTE_CONFIG` (default
    /// `./config.toml`). A missing file is not an error; the defaults
    /// point at the live API.
    pub async fn load() -> Result<Self> {
        let path = env::var("MARIONETTE_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = env::var("MARIONETTE_BASE_URL") {
            if !base_url.trim().is_empty() {
                self.base_url = base_url;
            }
        }
        if let Ok(timeout) = env::var("MARIONETTE_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.trim().parse() {
                self.request_timeout_seconds = seconds;
            }
        }
        if let Ok(agent) = env::var("MARIONETTE_USER_AGENT") {
            if !agent.trim().is_empty() {
                self.user_agent = Some(agent);
            }
        }
    }

    pub fn normalize(&mut self) {
        if let Some(agent) = &self.user_agent {
            if agent.trim().is_empty() {
                self.user_agent = None;
            }
        }
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(anyhow!("base_url must be an http(s) URL"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be positive"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            base_url: self.base_url.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let mut config = AppConfig::default();
        config.normalize();
        config.validate().expect("defaults");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn partial_toml_fills_the_rest_from_defaults() {
        let config: AppConfig =
            toml::from_str("base_url = \"https://items.example.test/api\"").expect("toml");
        assert_eq!(config.base_url, "https://items.example.test/api");
        assert_eq!(config.request_timeout_seconds, 15);
    }

    #[test]
    fn normalize_appends_trailing_slash_and_drops_blank_agent() {
        let mut config = AppConfig {
            base_url: "https://items.example.test/api".to_string(),
            request_timeout_seconds: 15,
            user_agent: Some("   ".to_string()),
        };
        config.normalize();
        assert_eq!(config.base_url, "https://items.example.test/api/");
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.base_url = "ftp://items.example.test/".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn runtime_config_carries_the_resolved_values() {
        let mut config = AppConfig::default();
        config.user_agent = Some("scripts/1.0".to_string());
        let runtime = config.to_runtime_config();
        assert_eq!(runtime.base_url, config.base_url);
        assert_eq!(runtime.request_timeout_seconds, 15);
        assert_eq!(runtime.user_agent.as_deref(), Some("scripts/1.0"));
    }
}
