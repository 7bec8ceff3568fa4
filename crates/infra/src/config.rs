//! Configuration loading (environment variables + defaults).

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "STOCKROOM_BIND_ADDR";
pub const SEED_DEMO_VAR: &str = "STOCKROOM_SEED_DEMO";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a boolean (true/false/1/0), got: {value}")]
    InvalidBool { var: &'static str, value: String },
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Insert a few demo products at startup.
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value,
            })?,
            None => default_bind_addr(),
        };

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            Some(value) => parse_bool(SEED_DEMO_VAR, value)?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            seed_demo,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_demo: false,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
