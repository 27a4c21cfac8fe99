//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables. The signing secret
//! is a hard startup precondition: without it the process refuses to start,
//! rather than rejecting every request at runtime.

use std::env;

use thiserror::Error;
use tracing::warn;

/// Environment variable holding the shared webhook signing secret.
pub const SIGNING_SECRET_VAR: &str = "CONTENTFUL_SIGNING_SECRET";

/// Errors that prevent the process from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret is absent or empty.
    #[error("environment variable CONTENTFUL_SIGNING_SECRET must be set to a non-empty signing secret")]
    MissingSecret,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret used to verify webhook signatures. Never logged.
    pub signing_secret: String,

    /// Port for the web server to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when the signing secret is missing or empty; everything else
    /// falls back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let signing_secret = env::var(SIGNING_SECRET_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        Ok(Config {
            signing_secret,
            port: parse_port("PORT", 8080),
        })
    }
}

/// Parse a port number, falling back to the default on absence or garbage.
fn parse_port(name: &str, default: u16) -> u16 {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid port value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        env::set_var("TEST_PORT_VALID", "9090");
        assert_eq!(parse_port("TEST_PORT_VALID", 8080), 9090);
        env::remove_var("TEST_PORT_VALID");
    }

    #[test]
    fn test_parse_port_default() {
        assert_eq!(parse_port("NONEXISTENT_PORT_VAR", 8080), 8080);
    }

    #[test]
    fn test_parse_port_garbage() {
        env::set_var("TEST_PORT_GARBAGE", "not-a-port");
        assert_eq!(parse_port("TEST_PORT_GARBAGE", 8080), 8080);
        env::remove_var("TEST_PORT_GARBAGE");
    }

    #[test]
    fn test_from_env_requires_secret() {
        // Sequential within one test: the variable is process-global.
        env::remove_var(SIGNING_SECRET_VAR);
        assert!(matches!(Config::from_env(), Err(ConfigError::MissingSecret)));

        env::set_var(SIGNING_SECRET_VAR, "   ");
        assert!(matches!(Config::from_env(), Err(ConfigError::MissingSecret)));

        env::set_var(SIGNING_SECRET_VAR, "topsecret");
        let config = Config::from_env().unwrap();
        assert_eq!(config.signing_secret, "topsecret");
        env::remove_var(SIGNING_SECRET_VAR);
    }
}
