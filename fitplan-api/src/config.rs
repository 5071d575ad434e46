use std::{env, fmt};

use actix_cors::Cors;
use dotenv::dotenv;
use itertools::Itertools;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FITPLAN_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("allowed origin must be an http(s) origin, got {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        let origins: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_owned)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            return Ok(Self::Any);
        }
        if let Some(bad) = origins
            .iter()
            .find(|o| !o.starts_with("http://") && !o.starts_with("https://"))
        {
            return Err(ConfigError::InvalidOrigin(bad.clone()));
        }
        Ok(Self::List(origins))
    }
}

impl fmt::Display for AllowedOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedOrigins::Any => f.write_str("*"),
            AllowedOrigins::List(origins) => write!(f, "{}", origins.iter().join(", ")),
        }
    }
}

/// Listen address and CORS policy, fixed at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            allowed_origins: AllowedOrigins::Any,
        }
    }
}

impl ServerConfig {
    /// Reads `FITPLAN_HOST`, `FITPLAN_PORT` and `FITPLAN_ALLOWED_ORIGINS`,
    /// honoring a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("FITPLAN_HOST").unwrap_or(defaults.host);
        let port = match lookup("FITPLAN_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => defaults.port,
        };
        let allowed_origins = match lookup("FITPLAN_ALLOWED_ORIGINS") {
            Some(origins) => AllowedOrigins::parse(&origins)?,
            None => defaults.allowed_origins,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    pub fn cors(&self) -> Cors {
        let cors = match &self.allowed_origins {
            AllowedOrigins::Any => Cors::default().allow_any_origin().send_wildcard(),
            AllowedOrigins::List(origins) => origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
        };
        cors.allow_any_method().allow_any_header()
    }
}
