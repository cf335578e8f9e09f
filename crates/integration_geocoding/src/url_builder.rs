//! Request URL assembly

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::GeocodingError;
use crate::request::QueryParams;

/// Name of the API key query parameter
pub const API_KEY_PARAM: &str = "key";

const REDACTED: &str = "***";

/// Append the API key and the encoded parameters to a base endpoint
///
/// The key (skipped when absent or blank) comes first, followed by `params` in
/// order. The first appended pair is joined with `?` unless `base` already has a
/// query string, every later one with `&`. Values are appended verbatim, so they
/// must already be encoded.
///
/// # Errors
///
/// Returns [`GeocodingError::MalformedUrl`] if the result does not parse as an
/// absolute URL. The URL in the error has the key redacted.
pub fn build_url(
    base: &str,
    api_key: Option<&SecretString>,
    params: &QueryParams,
) -> Result<Url, GeocodingError> {
    let api_key = api_key
        .map(|key| key.expose_secret())
        .filter(|key| !key.trim().is_empty());

    let mut url = String::from(base);
    let mut redacted = String::from(base);
    let mut has_query = base.contains('?');

    let mut append = |key: &str, value: &str, shown: &str| {
        let separator = if has_query { '&' } else { '?' };
        has_query = true;
        url.push(separator);
        url.push_str(&format!("{key}={value}"));
        redacted.push(separator);
        redacted.push_str(&format!("{key}={shown}"));
    };

    if let Some(key) = api_key {
        append(API_KEY_PARAM, key, REDACTED);
    }
    for (key, value) in params.iter() {
        append(key, value, value);
    }

    Url::parse(&url).map_err(|e| GeocodingError::MalformedUrl {
        url: redacted,
        reason: e.to_string(),
    })
}
