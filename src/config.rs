//! Configuration management for cyberdesk using the prefer crate.

use serde::{Deserialize, Serialize};

/// Default reporting API base when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the reporting API.
    pub api_base: String,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: "cyberdesk/0.3 (complaint review console)".to_string(),
            request_timeout: 30,
        }
    }
}

impl Settings {
    /// Create settings pointing at a specific API base.
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
            ..Default::default()
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the reporting API.
    #[serde(default)]
    pub api_base: Option<String>,
    /// User agent string.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Automatically discovers cyberdesk config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("cyberdesk").await {
            Ok(pref_config) => {
                let api_base: Option<String> = pref_config.get("api_base").ok();
                let user_agent: Option<String> = pref_config.get("user_agent").ok();
                let request_timeout: Option<u64> = pref_config.get("request_timeout").ok();

                Config {
                    api_base,
                    user_agent,
                    request_timeout,
                }
            }
            Err(_) => {
                // No config file found, use defaults
                Self::default()
            }
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref api_base) = self.api_base {
            settings.api_base = api_base.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
    }
}

/// Load settings from configuration (async version).
pub async fn load_settings() -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.request_timeout, 30);
    }

    #[test]
    fn test_apply_to_settings() {
        let config = Config {
            api_base: Some("https://reports.example.gov".to_string()),
            user_agent: None,
            request_timeout: Some(10),
        };

        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);

        assert_eq!(settings.api_base, "https://reports.example.gov");
        assert_eq!(settings.request_timeout, 10);
        // Unset fields keep their defaults
        assert!(settings.user_agent.starts_with("cyberdesk/"));
    }
}
