//! Environment-driven configuration.
//!
//! Values are read once at startup (after `dotenvy` has loaded any `.env`
//! file) and passed down explicitly; nothing here is process-global.

use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_RAZORPAY_API_BASE: &str = "https://api.razorpay.com/v1";
pub const DEFAULT_RAZORPAY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:5000/health";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{host}:{port} is not a valid listen address")]
    InvalidAddress { host: String, port: u16 },
}

/// Razorpay API credentials. Immutable once loaded.
#[derive(Clone)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
    pub api_base: String,
    pub timeout: Duration,
}

// Keep the secret out of logs.
impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` when `RAZORPAY_KEY_ID` or `RAZORPAY_KEY_SECRET` is unset; the
    /// payment endpoints then refuse requests.
    pub razorpay: Option<RazorpayConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };
        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let razorpay = match (non_empty("RAZORPAY_KEY_ID"), non_empty("RAZORPAY_KEY_SECRET")) {
            (Some(key_id), Some(key_secret)) => {
                let timeout_secs = match non_empty("RAZORPAY_TIMEOUT_SECS") {
                    Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                        name: "RAZORPAY_TIMEOUT_SECS",
                        value,
                    })?,
                    None => DEFAULT_RAZORPAY_TIMEOUT_SECS,
                };
                Some(RazorpayConfig {
                    key_id,
                    key_secret,
                    api_base: non_empty("RAZORPAY_API_BASE")
                        .map(|base| base.trim_end_matches('/').to_string())
                        .unwrap_or_else(|| DEFAULT_RAZORPAY_API_BASE.to_string()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            _ => None,
        };

        Ok(Self { host, port, razorpay })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress { host: self.host.clone(), port: self.port })
    }
}

/// Target of the heartbeat probe, from `HEALTH_URL`.
pub fn health_url_from_env() -> String {
    std::env::var("HEALTH_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HEALTH_URL.to_string())
}
