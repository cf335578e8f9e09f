//! Stream-based geocoding client
//!
//! One call produces at most one HTTP request and emits its results one by one.

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use reqwest::Client;
use reqwest::header::{RETRY_AFTER, USER_AGENT};
use tracing::{Instrument, debug, debug_span};
use url::Url;

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::models::GeocodingResult;
use crate::request::GeocodingRequest;
use crate::response::{decode_error_response, interpret_response, map_transport_error, parse_body};
use crate::url_builder::build_url;

/// Results of a single geocoding call, emitted individually
pub type GeocodingStream =
    Pin<Box<dyn Stream<Item = Result<GeocodingResult, GeocodingError>> + Send>>;

/// Trait for non-blocking geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Geocode a request
    ///
    /// The returned stream is lazy: nothing is sent until it is first polled, and
    /// dropping it aborts the in-flight request. It yields every result and then
    /// ends, or yields a single error.
    fn geocode(&self, request: &GeocodingRequest) -> GeocodingStream;

    /// Geocode a request and collect all results
    async fn geocode_all(
        &self,
        request: &GeocodingRequest,
    ) -> Result<Vec<GeocodingResult>, GeocodingError> {
        self.geocode(request).try_collect().await
    }
}

/// Geocoding client over an async `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl HttpGeocodingClient {
    /// Create a new client with its own HTTP connection pool
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

    /// Create a client on top of an existing `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_http_client(
        client: Client,
        config: GeocodingConfig,
    ) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;
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

    async fn fetch(
        client: Client,
        url: Url,
        user_agent: String,
        timeout_secs: u64,
    ) -> Result<Vec<GeocodingResult>, GeocodingError> {
        debug!("Sending geocoding request");

        let response = client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| map_transport_error(e, timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await.unwrap_or_default();
            return Err(decode_error_response(status, retry_after.as_deref(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, timeout_secs))?;

        let results = interpret_response(parse_body(&body)?)?;
        debug!(count = results.len(), "Geocoding results received");
        Ok(results)
    }
}

#[async_trait]
impl GeocodingClient for HttpGeocodingClient {
    fn geocode(&self, request: &GeocodingRequest) -> GeocodingStream {
        let url = match self.request_url(request) {
            Ok(url) => url,
            Err(e) => return Box::pin(stream::once(future::ready(Err(e)))),
        };

        let span = debug_span!("geocode", endpoint = %self.config.geocode_url);
        let fetch = Self::fetch(
            self.client.clone(),
            url,
            self.config.user_agent.clone(),
            self.config.timeout_secs,
        )
        .instrument(span);

        Box::pin(stream::once(fetch).flat_map(|outcome| {
            let items: Vec<Result<GeocodingResult, GeocodingError>> = match outcome {
                Ok(results) => results.into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            stream::iter(items)
        }))
    }
}
