//! Application configuration
//!
//! Split into focused sub-modules:
//! - `geocoding`: provider endpoints, credentials and request defaults
//!
//! Telemetry settings live next to their initialisation in [`crate::telemetry`].

mod geocoding;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use geocoding::GeocodingAppConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "GEOCODER";

/// Separator between the prefix and nested keys in environment variables
///
/// Double underscores keep keys such as `api_key` addressable, e.g.
/// `GEOCODER__GEOCODING__API_KEY`.
pub const ENV_SEPARATOR: &str = "__";

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding provider settings
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment variables
    ///
    /// Environment variables override file values, e.g.
    /// `GEOCODER__GEOCODING__TIMEOUT_SECS=30`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name("config").required(false),
            environment(),
        )
    }

    /// Load configuration from an explicit file, then environment variables
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::from(path.as_ref()).required(true),
            environment(),
        )
    }

    fn build<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .set_default(
                "geocoding.geocode_url",
                integration_geocoding::DEFAULT_GEOCODE_URL,
            )?
            .set_default("telemetry.json", false)?
            .add_source(file)
            .add_source(env)
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        debug!(
            geocode_url = %app_config.geocoding.geocode_url,
            has_api_key = app_config.geocoding.has_api_key(),
            "Configuration loaded"
        );
        Ok(app_config)
    }

    /// Parse configuration from a TOML document, without environment overrides
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Render the configuration as TOML
    ///
    /// The API key is never written.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, prefixed with its section name.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .to_client_config()
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;

        if self.telemetry.log_filter.trim().is_empty() {
            return Err("telemetry: log_filter must not be empty".to_string());
        }

        Ok(())
    }
}

/// Environment source for `GEOCODER__<SECTION>__<KEY>` variables
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
