//! Geocoding request model and query parameter encoding

use domain::{Bounds, Locale};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::region::top_level_country_code;

/// Insertion-ordered query parameters
///
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Create an empty parameter list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a parameter, replacing any previous value for the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Get the value of a parameter
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No parameters set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Forward geocoding request
///
/// Every field is optional. A meaningful request sets the free-text query or at
/// least one structured component, but nothing enforces that: an empty request
/// encodes to an empty parameter list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodingRequest {
    /// Viewport to bias results towards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,

    /// Language in which results are returned (only the language part is used)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,

    /// Region to bias results towards (only the country part is used)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Locale>,

    /// Free-text address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Postal code component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Country name or ISO 3166-1 code component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Street name component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// City or town component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    /// Administrative area component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
}

impl GeocodingRequest {
    /// Create an empty request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request for a free-text address
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Set the bias viewport
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the result language
    #[must_use]
    pub fn with_language(mut self, language: Locale) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the region bias
    #[must_use]
    pub fn with_region(mut self, region: Locale) -> Self {
        self.region = Some(region);
        self
    }

    /// Set the postal code component
    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Set the country component
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the route component
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the locality component
    #[must_use]
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    /// Set the administrative area component
    #[must_use]
    pub fn with_administrative_area(mut self, administrative_area: impl Into<String>) -> Self {
        self.administrative_area = Some(administrative_area.into());
        self
    }

    /// Build the `components` filter value, e.g. `postal_code:31228|country:DE`
    ///
    /// Returns `None` if no structured field is set.
    #[must_use]
    pub fn components(&self) -> Option<String> {
        let parts = [
            ("postal_code", &self.postal_code),
            ("country", &self.country),
            ("route", &self.route),
            ("locality", &self.locality),
            ("administrative_area", &self.administrative_area),
        ];

        let joined = parts
            .iter()
            .filter_map(|(name, value)| non_blank(value.as_deref()).map(|v| format!("{name}:{v}")))
            .collect::<Vec<_>>()
            .join("|");

        (!joined.is_empty()).then_some(joined)
    }

    /// Encode this request into query parameters
    ///
    /// Parameters appear in the order `bounds`, `language`, `region`, `address`,
    /// `components`; unset or blank fields are omitted. With `encode` set, the
    /// `address` and `components` values are form-urlencoded.
    #[must_use]
    pub fn build_parameters(&self, encode: bool) -> QueryParams {
        let mut params = QueryParams::new();

        if let Some(bounds) = self.bounds.as_ref().and_then(Bounds::to_param) {
            params.set("bounds", bounds);
        }

        if let Some(language) = non_blank(self.language.as_ref().map(Locale::language)) {
            params.set("language", language);
        }

        if let Some(region) = top_level_country_code(self.region.as_ref()) {
            params.set("region", region);
        }

        if let Some(query) = non_blank(self.query.as_deref()) {
            params.set("address", encode_query_parameter(query, encode));
        }

        if let Some(components) = self.components() {
            params.set("components", encode_query_parameter(&components, encode));
        }

        params
    }
}

/// Optionally form-urlencode a parameter value
///
/// Blank values encode to the empty string. Space becomes `+`; everything
/// outside `A-Z a-z 0-9 - _ . *` is percent-encoded as UTF-8.
#[must_use]
pub fn encode_query_parameter(value: &str, encode: bool) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    if encode {
        form_urlencoded::byte_serialize(value.as_bytes()).collect()
    } else {
        value.to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
