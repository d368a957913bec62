//! Runtime configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use adboard_auth::DEFAULT_PASSWORD_LENGTH;

pub const BIND_ADDR_VAR: &str = "ADBOARD_BIND_ADDR";
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";
pub const TEMP_PASSWORD_LENGTH_VAR: &str = "ADBOARD_TEMP_PASSWORD_LENGTH";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    /// Length of temporary passwords issued to provisioned accounts.
    pub temp_password_length: usize,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let jwt_secret = lookup(JWT_SECRET_VAR).unwrap_or_else(|| {
            tracing::warn!("{JWT_SECRET_VAR} not set; using insecure dev default");
            DEV_JWT_SECRET.to_string()
        });

        let temp_password_length = match lookup(TEMP_PASSWORD_LENGTH_VAR) {
            Some(raw) => parse_password_length(&raw)?,
            None => DEFAULT_PASSWORD_LENGTH,
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            temp_password_length,
        })
    }
}

fn parse_password_length(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: TEMP_PASSWORD_LENGTH_VAR,
        value: raw.to_string(),
        reason,
    };

    let n: usize = raw.trim().parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if n == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(n)
}
