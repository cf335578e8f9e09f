#![forbid(unsafe_code)]
//! Google Maps geocoding client
//!
//! Converts addresses into coordinates via the
//! [Geocoding API](https://developers.google.com/maps/documentation/geocoding).
//!
//! # Architecture
//!
//! A call runs in three pure steps around one HTTP GET:
//!
//! 1. [`GeocodingRequest::build_parameters`] encodes the request fields
//! 2. [`build_url`] appends the API key and the parameters to the endpoint
//! 3. [`interpret_response`] maps the status in the body to results or an error
//!
//! Two clients share these steps and differ only in how the transport is
//! awaited: [`BlockingGeocodingClient`] blocks the caller's thread, while
//! [`HttpGeocodingClient`] implements [`GeocodingClient`] and emits results as a
//! stream. Neither retries, caches or rate-limits.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Locale;
//! use futures::StreamExt;
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, GeocodingRequest, HttpGeocodingClient};
//!
//! let client = HttpGeocodingClient::new(GeocodingConfig::default().with_api_key("..."))?;
//! let request = GeocodingRequest::with_query("Hauptstraße 56, Peine")
//!     .with_language(Locale::germany());
//!
//! let mut results = client.geocode(&request);
//! while let Some(result) = results.next().await {
//!     let result = result?;
//!     println!("{} -> {}", result.formatted_address, result.location());
//! }
//! ```

mod blocking;
mod client;
mod config;
mod error;
mod models;
mod region;
mod request;
mod response;
mod url_builder;

pub use blocking::BlockingGeocodingClient;
pub use client::{GeocodingClient, GeocodingStream, HttpGeocodingClient};
pub use config::{DEFAULT_GEOCODE_URL, DEFAULT_REVERSE_URL, DEFAULT_SEARCH_URL, GeocodingConfig};
pub use error::GeocodingError;
pub use models::{
    AddressComponent, GeocodingResponse, GeocodingResult, GeocodingStatus, Geometry, LocationType,
    PlusCode,
};
pub use region::top_level_country_code;
pub use request::{GeocodingRequest, QueryParams, encode_query_parameter};
pub use response::{decode_error_response, interpret_response};
pub use url_builder::{API_KEY_PARAM, build_url};
