//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults that suit local development.

use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// Origins allowed by CORS, comma separated in the environment
    pub allowed_origins: Vec<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `PARCEL_API_PORT` - listen port (default 8080)
    /// - `PARCEL_DB_PATH` - SQLite file path (default ./parcels_dev.db)
    /// - `PARCEL_ALLOWED_ORIGINS` - comma-separated CORS origins
    ///   (default: the local frontend dev servers)
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("PARCEL_API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PARCEL_API_PORT".to_string()))?,

            database_path: env::var("PARCEL_DB_PATH")
                .unwrap_or_else(|_| "./parcels_dev.db".to_string()),

            allowed_origins: env::var("PARCEL_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:3000,http://localhost:5173".to_string()
                })
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        };

        Ok(config)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only meaningful when the variables are unset, which is the
        // normal test environment
        if env::var("PARCEL_API_PORT").is_ok() {
            return;
        }

        let config = ApiConfig::load().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, "./parcels_dev.db");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }
}
