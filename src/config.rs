use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_AI_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_PREFERENCES_PATH: &str = "data/preferences.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // AI gateway (chat support)
    pub ai_gateway_url: String,
    pub ai_gateway_api_key: Option<String>,
    pub ai_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },

            // AI gateway - the key is optional so the server can still serve
            // translations; chat requests report it as missing.
            ai_gateway_url: std::env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_AI_GATEWAY_URL.to_string()),
            ai_gateway_api_key: std::env::var("AI_GATEWAY_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            ai_model: std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_AI_MODEL.to_string()),
        })
    }
}

/// Location of the persisted language preference file.
///
/// The server keeps no preferences; only `portal-lang` reads this.
pub fn preferences_path() -> PathBuf {
    std::env::var("PREFERENCES_PATH")
        .unwrap_or_else(|_| DEFAULT_PREFERENCES_PATH.to_string())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "PORT",
        "AI_GATEWAY_URL",
        "AI_GATEWAY_API_KEY",
        "AI_MODEL",
        "PREFERENCES_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.port, 8080);
        assert_eq!(config.ai_gateway_url, DEFAULT_AI_GATEWAY_URL);
        assert_eq!(config.ai_gateway_api_key, None);
        assert_eq!(config.ai_model, DEFAULT_AI_MODEL);
        assert_eq!(preferences_path(), PathBuf::from(DEFAULT_PREFERENCES_PATH));
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("AI_GATEWAY_URL", "http://localhost:9999/v1/chat/completions");
        std::env::set_var("AI_GATEWAY_API_KEY", "secret");
        std::env::set_var("AI_MODEL", "test-model");
        std::env::set_var("PREFERENCES_PATH", "/tmp/prefs.json");

        let config = Config::from_env().expect("overrides should load");
        let prefs = preferences_path();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.ai_gateway_url, "http://localhost:9999/v1/chat/completions");
        assert_eq!(config.ai_gateway_api_key.as_deref(), Some("secret"));
        assert_eq!(config.ai_model, "test-model");
        assert_eq!(prefs, PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_none() {
        clear_env();
        std::env::set_var("AI_GATEWAY_API_KEY", "   ");

        let config = Config::from_env().expect("should load");
        clear_env();

        assert_eq!(config.ai_gateway_api_key, None);
    }
}
