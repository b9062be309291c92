//! Runtime configuration, read from the environment (and an optional `.env` file).
use axum::http::HeaderValue;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATISTICS_WINDOW_SECS: u64 = 60;
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Length of the trailing window used by `GET /transactions/statistics`
    pub statistics_window_secs: u64,
    /// Directory for the rolling log file; `None` logs to stdout only
    pub log_dir: Option<PathBuf>,
    /// Single allowed CORS origin; `None` allows any origin
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            statistics_window_secs: DEFAULT_STATISTICS_WINDOW_SECS,
            log_dir: Some(PathBuf::from(DEFAULT_LOG_DIR)),
            cors_allow_origin: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Recognized keys: `HOST`, `PORT`, `STATISTICS_WINDOW_SECS`, `LOG_DIR`
    /// and `CORS_ALLOW_ORIGIN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_dir = match lookup("LOG_DIR") {
            Some(dir) if dir.trim().is_empty() => None,
            Some(dir) => Some(PathBuf::from(dir)),
            None => defaults.log_dir,
        };

        let cors_allow_origin = lookup("CORS_ALLOW_ORIGIN")
            .filter(|origin| !origin.trim().is_empty())
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|e| ConfigError::InvalidValue {
                    key: "CORS_ALLOW_ORIGIN",
                    value: origin.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            statistics_window_secs: parse_or(
                &lookup,
                "STATISTICS_WINDOW_SECS",
                defaults.statistics_window_secs,
            )?,
            log_dir,
            cors_allow_origin,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
