//! Response status interpretation and HTTP error decoding

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::GeocodingError;
use crate::models::{GeocodingResponse, GeocodingResult, GeocodingStatus};

/// Turn a parsed response into its results or a provider error
///
/// `OK` yields the results unchanged, `ZERO_RESULTS` whatever the body carried
/// (normally nothing). Every other status becomes [`GeocodingError::Provider`].
pub fn interpret_response(
    response: GeocodingResponse,
) -> Result<Vec<GeocodingResult>, GeocodingError> {
    match response.status {
        GeocodingStatus::Ok | GeocodingStatus::ZeroResults => {
            debug!(
                status = %response.status,
                count = response.results.len(),
                "Geocoding succeeded"
            );
            Ok(response.results)
        },
        status => {
            warn!(
                %status,
                detail = response.error_message.as_deref().unwrap_or_default(),
                "Geocoding provider returned an error status"
            );
            Err(GeocodingError::provider(status, response.error_message))
        },
    }
}

/// Map a non-success HTTP status (and its body, if read) to an error
#[must_use]
pub fn decode_error_response(
    status: StatusCode,
    retry_after: Option<&str>,
    body: &str,
) -> GeocodingError {
    let detail = if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {}", body.trim())
    };

    if status == StatusCode::TOO_MANY_REQUESTS {
        GeocodingError::RateLimitExceeded {
            retry_after_secs: retry_after.and_then(|v| v.trim().parse().ok()),
        }
    } else if status.is_server_error() {
        GeocodingError::ServiceUnavailable(detail)
    } else {
        GeocodingError::RequestFailed(detail)
    }
}

/// Map a transport error from reqwest
///
/// The request URL is stripped first since it carries the API key.
pub(crate) fn map_transport_error(e: reqwest::Error, timeout_secs: u64) -> GeocodingError {
    let e = e.without_url();
    if e.is_timeout() {
        GeocodingError::Timeout { timeout_secs }
    } else if e.is_decode() {
        GeocodingError::ParseError(e.to_string())
    } else {
        GeocodingError::ConnectionFailed(e.to_string())
    }
}

/// Parse a response body
pub(crate) fn parse_body(body: &str) -> Result<GeocodingResponse, GeocodingError> {
    serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))
}
