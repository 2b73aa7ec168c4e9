//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use crate::plans::PlanStoreConfig;

/// Browser origins allowed to call the API by default (React and Vite dev servers).
const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Error raised for an unusable environment variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Issued plan retention
    pub plans: PlanStoreConfig,
    /// OurAirports-format CSV to load instead of the bundled airports
    pub airports_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            plans: PlanStoreConfig::default(),
            airports_url: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// - `AVIFLUX_BIND_ADDR` (default `127.0.0.1:8000`)
    /// - `AVIFLUX_ALLOWED_ORIGINS`: comma-separated origins
    /// - `AVIFLUX_PLAN_TTL_SECS` (default 3600)
    /// - `AVIFLUX_PLAN_CAPACITY` (default 10000)
    /// - `AVIFLUX_AIRPORTS_URL`: airport CSV to download at startup
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = lookup("AVIFLUX_BIND_ADDR") {
            config.bind_addr = parse_var("AVIFLUX_BIND_ADDR", &addr)?;
        }

        if let Some(origins) = lookup("AVIFLUX_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(ttl) = lookup("AVIFLUX_PLAN_TTL_SECS") {
            config.plans.ttl = Duration::from_secs(parse_var("AVIFLUX_PLAN_TTL_SECS", &ttl)?);
        }

        if let Some(capacity) = lookup("AVIFLUX_PLAN_CAPACITY") {
            config.plans.max_capacity = parse_var("AVIFLUX_PLAN_CAPACITY", &capacity)?;
        }

        config.airports_url = lookup("AVIFLUX_AIRPORTS_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        value: value.to_string(),
    })
}
