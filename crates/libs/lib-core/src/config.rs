//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! | Variable                | Default                  |
//! |-------------------------|--------------------------|
//! | `HOST`                  | `127.0.0.1`              |
//! | `PORT`                  | `9090`                   |
//! | `DATABASE_URL`          | `sqlite:data/company.db` |
//! | `JWT_SECRET`            | required                 |
//! | `ACCESS_TOKEN_TTL_SECS` | `120`                    |
//! | `SHUTDOWN_TIMEOUT_SECS` | `15`                     |

use lib_utils::envs::{get_env, get_env_or, get_env_parse_or};

use crate::{AppError, Result};

/// Longest accepted token lifetime: 30 days.
const MAX_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Host the HTTP server binds to
    pub host: String,

    /// Port the HTTP server binds to
    pub port: u16,

    /// Store connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification
    ///
    /// **Must be at least 32 characters long** for security.
    pub jwt_secret: String,

    /// Access token validity period in seconds
    pub access_token_ttl_secs: i64,

    /// How long shutdown waits for in-flight requests, in seconds
    pub shutdown_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let host = get_env_or("HOST", "127.0.0.1");

        let port = get_env_parse_or("PORT", 9090)
            .map_err(|e| AppError::Config(format!("PORT must be a valid port number: {e}")))?;

        let database_url = get_env_or("DATABASE_URL", "sqlite:data/company.db");

        let jwt_secret = get_env("JWT_SECRET")
            .map_err(|_| AppError::Config("JWT_SECRET must be set in environment".to_string()))?;

        let access_token_ttl_secs = get_env_parse_or("ACCESS_TOKEN_TTL_SECS", 120).map_err(|e| {
            AppError::Config(format!("ACCESS_TOKEN_TTL_SECS must be a valid number: {e}"))
        })?;

        let shutdown_timeout_secs = get_env_parse_or("SHUTDOWN_TIMEOUT_SECS", 15).map_err(|e| {
            AppError::Config(format!("SHUTDOWN_TIMEOUT_SECS must be a valid number: {e}"))
        })?;

        Ok(Self {
            host,
            port,
            database_url,
            jwt_secret,
            access_token_ttl_secs,
            shutdown_timeout_secs,
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.len() < 32 {
            return Err(AppError::Config(
                "JWT_SECRET must be at least 32 characters long".to_string(),
            ));
        }

        if self.access_token_ttl_secs < 1 || self.access_token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(AppError::Config(format!(
                "ACCESS_TOKEN_TTL_SECS must be between 1 and {MAX_TOKEN_TTL_SECS} (30 days)"
            )));
        }

        Ok(())
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 9090,
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
            access_token_ttl_secs: 120,
            shutdown_timeout_secs: 15,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(valid_config().validate().is_ok());
        assert_eq!(valid_config().bind_address(), "127.0.0.1:9090");
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        let config = Config {
            jwt_secret: "short".to_string(),
            ..valid_config()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_ttl_out_of_range() {
        for ttl in [0, -5, MAX_TOKEN_TTL_SECS + 1] {
            let config = Config {
                access_token_ttl_secs: ttl,
                ..valid_config()
            };
            assert!(matches!(config.validate(), Err(AppError::Config(_))));
        }
    }
}
