use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Allowed CORS origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin, no credentials.
    Any,
    /// An explicit allow-list; credentials are permitted.
    List(Vec<HeaderValue>),
}

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://folio.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Insert the sample articles into an empty database at startup (default: `true`).
    pub seed_sample_data: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default             |
    /// |------------------------|---------------------|
    /// | `HOST`                 | `0.0.0.0`           |
    /// | `PORT`                 | `3000`              |
    /// | `DATABASE_URL`         | `sqlite://folio.db` |
    /// | `CORS_ORIGINS`         | `*`                 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                |
    /// | `SEED_SAMPLE_DATA`     | `true`              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "HOST", "0.0.0.0", "an IP address")?;
        let port = parse_var(&lookup, "PORT", "3000", "a valid u16")?;
        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "a valid u64")?;

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://folio.db".into());

        let cors_raw = lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into());
        let cors_origins = parse_cors_origins(&cors_raw)?;

        let seed_raw = lookup("SEED_SAMPLE_DATA").unwrap_or_else(|| "true".into());
        let seed_sample_data = parse_bool(&seed_raw).ok_or_else(|| ConfigError {
            var: "SEED_SAMPLE_DATA",
            expected: "a boolean",
            value: seed_raw.clone(),
        })?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            seed_sample_data,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    raw.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value: raw,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: raw.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
