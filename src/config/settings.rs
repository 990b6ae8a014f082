use anyhow::{anyhow, Result};
use clap::ValueEnum;

use crate::utils::constants::DEFAULT_BIND;

/// ================================
/// Listener
/// ================================
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Go-style socket address, e.g. `:8080`, `127.0.0.1:0`, `[::1]:9000`
    pub bind: String,
}

impl ServerConfig {
    pub fn new(bind: String) -> Self {
        Self { bind }
    }

    /// Address handed to the listener.
    ///
    /// An empty host means every IPv4 interface and an empty port means an
    /// ephemeral one. Host names are left for the listener to resolve.
    pub fn listen_address(&self) -> Result<String> {
        let (host, port) = self
            .bind
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("address {}: missing port in address", self.bind))?;

        let port = if port.is_empty() { "0" } else { port };
        port.parse::<u16>()
            .map_err(|_| anyhow!("address {}: invalid port '{}'", self.bind, port))?;

        let host = if host.is_empty() { "0.0.0.0" } else { host };
        Ok(format!("{}:{}", host, port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BIND.to_owned())
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Compact,
}
