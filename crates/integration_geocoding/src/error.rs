//! Geocoding error types

use thiserror::Error;

use crate::models::GeocodingStatus;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The assembled request URL is not a valid URL
    #[error("Malformed URL {url}: {reason}")]
    MalformedUrl {
        /// The assembled URL, with the API key redacted
        url: String,
        /// Why the URL was rejected
        reason: String,
    },

    /// The provider answered with an error status in the response body
    #[error("{}", .status.message())]
    Provider {
        /// The status reported by the provider
        status: GeocodingStatus,
        /// Machine-readable code derived from the status name
        code: String,
        /// Additional detail supplied by the provider, if any
        detail: Option<String>,
    },

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Service is temporarily unavailable (HTTP 5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocodingError {
    /// Build the error for a non-success provider status
    #[must_use]
    pub fn provider(status: GeocodingStatus, detail: Option<String>) -> Self {
        Self::Provider {
            status,
            code: status.code(),
            detail,
        }
    }

    /// Machine-readable error code
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::Provider { code, .. } => code.clone(),
            Self::ConnectionFailed(_) => "GEOCODING_CLIENT:CONNECTION_FAILED".to_string(),
            Self::RequestFailed(_) => "GEOCODING_CLIENT:REQUEST_FAILED".to_string(),
            Self::ParseError(_) => "GEOCODING_CLIENT:PARSE_ERROR".to_string(),
            Self::MalformedUrl { .. } => "GEOCODING_CLIENT:MALFORMED_URL".to_string(),
            Self::RateLimitExceeded { .. } => "GEOCODING_CLIENT:RATE_LIMIT_EXCEEDED".to_string(),
            Self::ServiceUnavailable(_) => "GEOCODING_CLIENT:SERVICE_UNAVAILABLE".to_string(),
            Self::Timeout { .. } => "GEOCODING_CLIENT:TIMEOUT".to_string(),
            Self::ConfigurationError(_) => "GEOCODING_CLIENT:CONFIGURATION_ERROR".to_string(),
        }
    }

    /// The provider status, if this error came from the response body
    #[must_use]
    pub const fn status(&self) -> Option<GeocodingStatus> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if a later attempt may succeed
    ///
    /// The client never retries on its own; this is for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_)
            | Self::ServiceUnavailable(_)
            | Self::Timeout { .. }
            | Self::RateLimitExceeded { .. } => true,
            Self::Provider { status, .. } => matches!(
                status,
                GeocodingStatus::UnknownError | GeocodingStatus::OverQueryLimit
            ),
            _ => false,
        }
    }
}
