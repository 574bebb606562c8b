//! Application settings loaded via OrthoConfig.
//!
//! Sources, lowest precedence first: configuration file, `AULA_*` environment
//! variables, command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Raised when `bind_addr` is not a socket address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bind address must be host:port, got {value}")]
pub struct InvalidBindAddr {
    value: String,
}

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AULA")]
pub struct AppSettings {
    /// PostgreSQL URL. Without one the service keeps documents in memory.
    pub database_url: Option<String>,
    /// Address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Skip applying bundled migrations at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl AppSettings {
    /// Configured listener address, defaulting to port 3000 on all
    /// interfaces.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidBindAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| InvalidBindAddr {
            value: raw.to_owned(),
        })
    }

    /// Configured pool size, defaulting to ten connections.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}
