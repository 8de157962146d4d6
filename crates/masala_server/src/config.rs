//! Configuration for the HTTP server.

use masala_error::ConfigError;

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "0.0.0.0:3000"
    pub bind: String,
}

impl ServerConfig {
    /// Create config from environment variables
    ///
    /// Reads `MASALA_BIND` (default: "0.0.0.0:3000").
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = std::env::var("MASALA_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        Ok(Self { bind })
    }
}
