//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default PokéAPI endpoint.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// PokéAPI upstream configuration.
    pub pokeapi: PokeApiConfig,

    /// Outbound webhook configuration.
    pub webhooks: WebhooksConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the PokéAPI upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokeApiConfig {
    /// Base URL for PokéAPI requests (no trailing slash).
    /// Overridable so tests and mirrors can point elsewhere.
    pub base_url: String,
}

/// Configuration for outbound webhooks.
#[derive(Clone, Serialize, Deserialize)]
pub struct WebhooksConfig {
    /// Endpoint for the brand-data webhook used by the `get_brand_info` tool.
    /// The tool returns an error result when this is unset.
    pub brand_url: Option<String>,
}

/// Custom Debug implementation to keep webhook URLs (which may embed
/// access tokens) out of logs.
impl std::fmt::Debug for WebhooksConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhooksConfig")
            .field("brand_url", &self.brand_url.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
        }
    }
}

impl Default for WebhooksConfig {
    fn default() -> Self {
        Self { brand_url: None }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pokedex-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            pokeapi: PokeApiConfig::default(),
            webhooks: WebhooksConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_POKEAPI_BASE_URL") {
            config.pokeapi.base_url = base_url.trim_end_matches('/').to_string();
            info!("PokéAPI base URL overridden from environment");
        }

        if let Ok(url) = std::env::var("MCP_BRAND_WEBHOOK_URL") {
            config.webhooks.brand_url = Some(url);
            info!("Brand webhook URL loaded from environment");
        } else {
            warn!(
                "MCP_BRAND_WEBHOOK_URL not set - the get_brand_info tool \
                 will return an error until it is configured"
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_pokeapi_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_POKEAPI_BASE_URL", "http://localhost:9090/api/v2/");
        }
        let config = Config::from_env();
        assert_eq!(config.pokeapi.base_url, "http://localhost:9090/api/v2");
        unsafe {
            std::env::remove_var("MCP_POKEAPI_BASE_URL");
        }
    }

    #[test]
    fn test_pokeapi_base_url_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_POKEAPI_BASE_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.pokeapi.base_url, DEFAULT_POKEAPI_BASE_URL);
    }

    #[test]
    fn test_brand_webhook_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_BRAND_WEBHOOK_URL", "https://hooks.example.com/brand");
        }
        let config = Config::from_env();
        assert_eq!(
            config.webhooks.brand_url.as_deref(),
            Some("https://hooks.example.com/brand")
        );
        unsafe {
            std::env::remove_var("MCP_BRAND_WEBHOOK_URL");
        }
    }

    #[test]
    fn test_webhook_url_redacted_in_debug() {
        let webhooks = WebhooksConfig {
            brand_url: Some("https://hooks.example.com/brand?token=secret".to_string()),
        };
        let debug_str = format!("{:?}", webhooks);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_config_default_has_no_webhook() {
        let config = Config::default();
        assert!(config.webhooks.brand_url.is_none());
    }
}
