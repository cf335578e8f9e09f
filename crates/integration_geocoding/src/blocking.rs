//! Blocking geocoding client
//!
//! Runs entirely on the caller's thread. Must not be used from inside an async
//! runtime; use [`HttpGeocodingClient`](crate::HttpGeocodingClient) there.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{RETRY_AFTER, USER_AGENT};
use tracing::{debug, instrument};
use url::Url;

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::models::GeocodingResult;
use crate::request::GeocodingRequest;
use crate::response::{decode_error_response, interpret_response, map_transport_error, parse_body};
use crate::url_builder::build_url;

/// Geocoding client over a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct BlockingGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl BlockingGeocodingClient {
    /// Create a new blocking client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &GeocodingConfig {
        &self.config
    }

    /// Build the full request URL for a geocoding request
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::MalformedUrl`] if the URL is invalid.
    pub fn request_url(&self, request: &GeocodingRequest) -> Result<Url, GeocodingError> {
        build_url(
            &self.config.geocode_url,
            self.config.api_key.as_ref(),
            &request.build_parameters(true),
        )
    }

    /// Geocode a request, blocking until the provider answers
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the transport fails, the HTTP
    /// status is not a success, the body cannot be parsed or the provider reports
    /// an error status.
    #[instrument(skip(self, request), fields(endpoint = %self.config.geocode_url))]
    pub fn geocode(
        &self,
        request: &GeocodingRequest,
    ) -> Result<Vec<GeocodingResult>, GeocodingError> {
        let url = self.request_url(request)?;
        debug!("Sending geocoding request");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .map_err(|e| map_transport_error(e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = response.text().unwrap_or_default();
            return Err(decode_error_response(status, retry_after.as_deref(), &body));
        }

        let body = response
            .text()
            .map_err(|e| map_transport_error(e, self.config.timeout_secs))?;

        let results = interpret_response(parse_body(&body)?)?;
        debug!(count = results.len(), "Geocoding results received");
        Ok(results)
    }
}
