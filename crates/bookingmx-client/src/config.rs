//! Client configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! TOML file, then `BOOKINGMX_*` environment variables.
//!
//! - `BOOKINGMX_BASE_URL`: reservations collection URL
//!   (default: `http://localhost:8080/api/reservations`)
//! - `BOOKINGMX_TIMEOUT_SECS`: per-request timeout (default: 10)

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default reservations collection URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/reservations";
/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BOOKINGMX_";

/// Reservation client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// URL of the reservations collection.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Creates a config pointing at `base_url` with the default timeout.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Returns the layered figment: defaults, optional TOML file, environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration from defaults, `path` (if given) and environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `path` does not exist or a value has the
    /// wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }
        Self::figment(path)
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }
}
