//! Geocoding client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Default Google Maps geocoding endpoint
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Default reverse geocoding endpoint
pub const DEFAULT_REVERSE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Default search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json?address=1600+Amphitheatre+Parkway,+Mountain+View,+CA&key=";

/// Configuration for the geocoding clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Provider API key, appended as the `key` query parameter (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Forward geocoding endpoint (may already contain a query string)
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Search endpoint (carried for related providers, unused by this client)
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Reverse geocoding endpoint (carried for related providers, unused by this client)
    #[serde(default = "default_reverse_url")]
    pub reverse_url: String,

    /// `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocode_url() -> String {
    DEFAULT_GEOCODE_URL.to_string()
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_reverse_url() -> String {
    DEFAULT_REVERSE_URL.to_string()
}

fn default_user_agent() -> String {
    "curl/7.54.0".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geocode_url: default_geocode_url(),
            search_url: default_search_url(),
            reverse_url: default_reverse_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing against a local endpoint
    #[must_use]
    pub fn for_testing(geocode_url: impl Into<String>) -> Self {
        Self {
            geocode_url: geocode_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Check if a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.geocode_url.trim().is_empty() {
            return Err("geocode_url must not be empty".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
