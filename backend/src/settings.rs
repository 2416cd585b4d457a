//! Process configuration loaded via OrthoConfig.
//!
//! Values layer as defaults, then an optional configuration file, then
//! `USERS_API_*` environment variables, then command-line flags.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{IdStrategy, IdStrategyParseError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Raised when configured values cannot be turned into runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The host is not an IP address.
    #[error("invalid host `{host}`: {message}")]
    InvalidHost {
        /// Host value as configured.
        host: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The identifier strategy is not recognised.
    #[error(transparent)]
    IdStrategy(#[from] IdStrategyParseError),
}

/// Configuration values controlling the HTTP listener and id assignment.
///
/// `id_strategy` defaults to `collection_size`, which hands out
/// `count + 1` and can reuse an identifier after a deletion. Set it to
/// `monotonic` for identifiers that never repeat.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct AppSettings {
    /// Interface address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Identifier strategy: `collection_size` or `monotonic`.
    pub id_strategy: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            id_strategy: None,
        }
    }
}

impl AppSettings {
    /// Return the configured host, falling back to every interface.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    ///
    /// # Examples
    /// ```
    /// use users_api::settings::AppSettings;
    ///
    /// let settings = AppSettings::default();
    /// assert_eq!(settings.bind_addr().expect("valid").to_string(), "0.0.0.0:8080");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|err| SettingsError::InvalidHost {
                host: host.to_owned(),
                message: err.to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Resolve the identifier strategy.
    ///
    /// # Errors
    /// Returns [`SettingsError::IdStrategy`] for unrecognised names.
    pub fn id_strategy(&self) -> Result<IdStrategy, SettingsError> {
        match self.id_strategy.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(IdStrategy::default()),
        }
    }
}
