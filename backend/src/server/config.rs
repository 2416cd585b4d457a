//! HTTP server configuration object.

use std::net::SocketAddr;

use users_api::domain::IdStrategy;
use users_api::settings::{AppSettings, SettingsError};

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) id_strategy: IdStrategy,
}

impl ServerConfig {
    /// Construct a server configuration with the default identifier strategy.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            id_strategy: IdStrategy::default(),
        }
    }

    /// Resolve layered settings into a server configuration.
    ///
    /// # Errors
    /// Propagates [`SettingsError`] for an invalid host or strategy.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_addr()?).with_id_strategy(settings.id_strategy()?))
    }

    /// Select how new user identifiers are derived.
    #[must_use]
    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the identifier strategy handed to the user service.
    #[must_use]
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }
}
