//! Geocoding provider configuration

use domain::Locale;
use integration_geocoding::{
    DEFAULT_GEOCODE_URL, DEFAULT_REVERSE_URL, DEFAULT_SEARCH_URL, GeocodingConfig,
    GeocodingRequest,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Geocoding configuration as it appears in `config.toml`
#[derive(Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Google Maps API key (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Forward geocoding endpoint
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Search endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Reverse geocoding endpoint
    #[serde(default = "default_reverse_url")]
    pub reverse_url: String,

    /// `User-Agent` header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Result language used when a request does not set one (e.g. "de-DE")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,

    /// Region bias used when a request does not set one (e.g. "en-GB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Locale>,
}

impl std::fmt::Debug for GeocodingAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAppConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("geocode_url", &self.geocode_url)
            .field("search_url", &self.search_url)
            .field("reverse_url", &self.reverse_url)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("region", &self.region)
            .finish()
    }
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
    GeocodingConfig::default().user_agent
}

fn default_timeout_secs() -> u64 {
    GeocodingConfig::default().timeout_secs
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geocode_url: default_geocode_url(),
            search_url: default_search_url(),
            reverse_url: default_reverse_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            language: None,
            region: None,
        }
    }
}

impl GeocodingAppConfig {
    /// Check if a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Convert to `integration_geocoding`'s `GeocodingConfig`
    #[must_use]
    pub fn to_client_config(&self) -> GeocodingConfig {
        GeocodingConfig {
            api_key: self.api_key.clone(),
            geocode_url: self.geocode_url.clone(),
            search_url: self.search_url.clone(),
            reverse_url: self.reverse_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Fill in the configured language and region where the request leaves them unset
    #[must_use]
    pub fn apply_defaults(&self, mut request: GeocodingRequest) -> GeocodingRequest {
        if request.language.is_none() {
            request.language.clone_from(&self.language);
        }
        if request.region.is_none() {
            request.region.clone_from(&self.region);
        }
        request
    }
}
