//! Configuration management for the API
//!
//! This module handles loading and defaulting of all service configuration.

use crate::utils::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Recognizes `PORT` (default 5000) and `DEBUG` (default false).
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| ApiError::config(format!("Invalid PORT value: {}", port)))?;
        }

        if let Ok(debug) = env::var("DEBUG") {
            config.server.debug = debug.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Get the server bind address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(!config.server.debug);
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            debug: false,
        };
        assert_eq!(config.address(), "127.0.0.1:8080");
    }
}
