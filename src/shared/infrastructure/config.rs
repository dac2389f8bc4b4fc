// Process configuration read from the environment.
//
// Responsibilities
// - Require the four database settings and fail before anything starts when one is missing.
// - Apply defaults for the optional settings.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

use crate::modules::time_logs::core::clock::DEFAULT_TIME_ZONE;

pub const LISTEN_PORT: u16 = 8080;
pub const LOG_FILE: &str = "app.log";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub timeout: Duration,
}

// Keeps DB_PASS out of logs.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub time_zone: String,
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

        let db = DbConfig {
            user: required("DB_USER")?,
            password: required("DB_PASS")?,
            host: required("DB_HOST")?,
            name: required("DB_NAME")?,
            port: parse_optional("DB_PORT", optional("DB_PORT"), DEFAULT_DB_PORT)?,
            timeout: Duration::from_secs(parse_optional(
                "DB_TIMEOUT_SECS",
                optional("DB_TIMEOUT_SECS"),
                DEFAULT_DB_TIMEOUT_SECS,
            )?),
        };

        Ok(Self {
            db,
            time_zone: optional("TIME_ZONE").unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string()),
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT)),
        })
    }
}

fn parse_optional<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
