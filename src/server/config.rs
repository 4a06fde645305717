use std::{
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub database_connect_timeout: Duration,

    pub port: u16,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead so
    /// they never mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            database_connect_timeout: parse_secs(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                lookup("DATABASE_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            port: resolve_port(lookup("PORT").as_deref()),
            shutdown_timeout: parse_secs(
                "SHUTDOWN_TIMEOUT_SECS",
                lookup("SHUTDOWN_TIMEOUT_SECS"),
                DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            )?,
        })
    }

    /// Address the HTTP listener binds: all IPv4 interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Resolves the listening port from the raw `PORT` value.
///
/// Missing, unparseable and zero values all fall back to 8000.
pub fn resolve_port(raw: Option<&str>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_PORT;
    };

    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            tracing::warn!(
                "Ignoring invalid PORT value '{}', using {}",
                raw,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

fn parse_secs(name: &str, raw: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(default));
    };

    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })
}
