//! Logging and tracing setup
//!
//! Installs a `tracing-subscriber` registry writing to stdout, either as
//! human-readable lines or as JSON.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
