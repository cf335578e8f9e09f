//! Infrastructure layer - configuration and logging
//!
//! Loads [`AppConfig`] from `config.toml` and `GEOCODER__*` environment
//! variables and installs the tracing subscriber.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ENV_PREFIX, ENV_SEPARATOR, GeocodingAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
