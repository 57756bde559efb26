//! Server configuration from environment variables

use anyhow::{bail, Context};
use std::net::SocketAddr;

/// Default listen address; the dashboard front end targets port 8000
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format '{}' (expected text or json)", other),
        }
    }
}

/// Startup settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the API listens on (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,

    /// Prometheus exporter address (`METRICS_ADDRESS`), disabled when unset
    pub metrics_address: Option<SocketAddr>,

    /// Log format (`LOG_FORMAT`)
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .context("invalid BIND_ADDRESS")?;

        let metrics_address = lookup("METRICS_ADDRESS")
            .filter(|v| !v.is_empty())
            .map(|v| v.parse::<SocketAddr>())
            .transpose()
            .context("invalid METRICS_ADDRESS")?;

        let log_format = lookup("LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .context("invalid LOG_FORMAT")?
            .unwrap_or_default();

        Ok(Self {
            bind_address,
            metrics_address,
            log_format,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8000)),
            metrics_address: None,
            log_format: LogFormat::Text,
        }
    }
}
