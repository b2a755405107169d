//! Host configuration parsed from environment variables.
//!
//! The bind address defaults to `site-addr` from the `cargo-leptos` metadata
//! so `cargo leptos watch` and a plain `cargo run` listen on the same socket.

use std::net::{IpAddr, SocketAddr};

use leptos::config::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid HOST: {0}")]
    InvalidHost(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Load `[workspace.metadata.leptos]` (or its `LEPTOS_*` env overrides).
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] when the metadata is missing or malformed.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ConfigError::Leptos(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from the process environment (after `.env` loading).
    ///
    /// Optional:
    /// - `HOST`: bind address, default is the host part of `site_addr`
    /// - `PORT`: default is the port part of `site_addr`
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), site_addr)
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, site_addr: SocketAddr) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => site_addr.ip(),
        };
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => site_addr.port(),
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
