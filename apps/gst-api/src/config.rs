//! # API Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The core needs none of this; the bind address is purely a
//! host-shell concern.

use serde::{Deserialize, Serialize};
use std::env;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind host (default `0.0.0.0`)
    pub host: String,

    /// HTTP server port (default `8000`)
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            host: env::var("GST_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("GST_API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GST_API_PORT".to_string()))?,
        };

        Ok(config)
    }

    /// The `host:port` string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
