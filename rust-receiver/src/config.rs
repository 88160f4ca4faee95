//! Configuration module for environment variable parsing.
//!
//! The signing secret is the only required setting. Everything else has a
//! default so the receiver can run with a single variable exported.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// Environment variable holding the Slack signing secret.
pub const SIGNING_SECRET_VAR: &str = "SLACK_SIGNING_SECRET";

/// Errors raised while loading configuration. All of them are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SLACK_SIGNING_SECRET environment variable not specified")]
    MissingSigningSecret,
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Slack signing secret used as the HMAC key
    pub signing_secret: String,

    /// Port for the web server to listen on
    pub port: u16,

    /// Upper bound on draining in-flight requests after a shutdown signal
    pub shutdown_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signing_secret = lookup(SIGNING_SECRET_VAR)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSigningSecret)?;

        Ok(Config {
            signing_secret,

            port: parse_or_default(&lookup, "PORT", 8080),

            shutdown_timeout: Duration::from_secs(parse_or_default(
                &lookup,
                "SHUTDOWN_TIMEOUT_SECS",
                5,
            )),
        })
    }
}

// Keeps the secret out of `{:?}` output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("signing_secret", &"<redacted>")
            .field("port", &self.port)
            .field("shutdown_timeout", &self.shutdown_timeout)
            .finish()
    }
}

/// Parse a variable, falling back to `default` when it is unset or invalid.
fn parse_or_default<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = match lookup(name) {
        Some(v) => v,
        None => return default,
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid value, using default");
            default
        }
    }
}
