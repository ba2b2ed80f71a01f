//! Server listen-address configuration.
//!
//! DESIGN
//! ======
//! The Leptos site address (from `[[workspace.metadata.leptos]]` or the
//! `LEPTOS_SITE_ADDR` variable) is the default; `HOST` and `PORT` override
//! its parts so deployments can bind without touching Leptos settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}")]
    Host(String),
    #[error("invalid PORT {0:?}")]
    Port(String),
}

/// Resolved listen settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
}

impl Settings {
    /// Read `HOST`/`PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is set but unparsable.
    pub fn from_env(default: SocketAddr) -> Result<Self, ConfigError> {
        Self::from_lookup(default, |key| std::env::var(key).ok())
    }

    fn from_lookup<F>(default: SocketAddr, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST").map(|v| v.trim().to_owned()) {
            Some(raw) if !raw.is_empty() => raw.parse().map_err(|_| ConfigError::Host(raw))?,
            _ => default.ip(),
        };
        let port = match lookup("PORT").map(|v| v.trim().to_owned()) {
            Some(raw) if !raw.is_empty() => raw.parse().map_err(|_| ConfigError::Port(raw))?,
            _ => default.port(),
        };
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
