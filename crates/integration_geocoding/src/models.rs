//! Geocoding response models
//!
//! Types mirroring the JSON returned by the Google Maps Geocoding API.
//! Unknown fields are ignored so that provider additions never break parsing.

use std::fmt;

use domain::{Bounds, LatLng};
use serde::{Deserialize, Serialize};

/// Status code embedded in every geocoding response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeocodingStatus {
    /// At least one geocode was returned
    Ok,
    /// The request was valid but nothing matched
    ZeroResults,
    /// Key missing or invalid, billing disabled, usage cap hit or payment invalid
    OverDailyLimit,
    /// Quota exhausted
    OverQueryLimit,
    /// Request was denied
    RequestDenied,
    /// Address, components or latlng missing
    InvalidRequest,
    /// Server-side failure; also used for status strings this client does not know
    #[serde(other)]
    UnknownError,
}

impl GeocodingStatus {
    /// All statuses, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Ok,
        Self::ZeroResults,
        Self::OverDailyLimit,
        Self::OverQueryLimit,
        Self::RequestDenied,
        Self::InvalidRequest,
        Self::UnknownError,
    ];

    /// Fixed human-readable message for this status
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Ok => {
                "No errors occurred; the address was successfully parsed and at least one geocode was returned."
            },
            Self::ZeroResults => "The geocode was successful but returned no results.",
            Self::OverDailyLimit => {
                "The API key is missing or invalid, billing has not been enabled, a self-imposed usage cap has been exceeded or the method of payment is no longer valid."
            },
            Self::OverQueryLimit => "You are over your quota.",
            Self::RequestDenied => "Your request was denied.",
            Self::InvalidRequest => "The query (address, components or latlng) is missing.",
            Self::UnknownError => {
                "The request could not be processed due to a server error. The request may succeed if you try again."
            },
        }
    }

    /// Wire name of the status, e.g. `OVER_QUERY_LIMIT`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Machine-readable error code derived from the status name
    #[must_use]
    pub fn code(&self) -> String {
        format!("GEOCODING_CLIENT:{}", self.as_str())
    }

    /// `OK` and `ZERO_RESULTS` are the only non-error statuses
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::ZeroResults)
    }
}

impl fmt::Display for GeocodingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precision of a geocoded location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// Precise street address
    Rooftop,
    /// Interpolated between two precise points
    RangeInterpolated,
    /// Center of a polyline or polygon
    GeometricCenter,
    /// Approximate location
    Approximate,
    /// Missing or unrecognised value
    #[default]
    #[serde(other)]
    Unknown,
}

/// Top-level geocoding response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResponse {
    /// Response status
    pub status: GeocodingStatus,

    /// Results in provider order (absent for `ZERO_RESULTS`)
    #[serde(default)]
    pub results: Vec<GeocodingResult>,

    /// Provider-supplied detail for error statuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A single geocoding match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    /// Separate address components of this result
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,

    /// Human-readable address
    #[serde(default)]
    pub formatted_address: String,

    /// All localities of a postal code result that spans several
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postcode_localities: Vec<String>,

    /// Location information
    pub geometry: Geometry,

    /// Feature type tags, e.g. `street_address` or `locality`
    #[serde(default)]
    pub types: Vec<String>,

    /// The geocoder matched only part of the request
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub partial_match: bool,

    /// Provider-assigned place identifier
    #[serde(default)]
    pub place_id: String,

    /// Plus Code for this place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
}

impl GeocodingResult {
    /// First address component carrying the given type tag
    #[must_use]
    pub fn component(&self, component_type: &str) -> Option<&AddressComponent> {
        self.address_components
            .iter()
            .find(|c| c.has_type(component_type))
    }

    /// Geocoded point
    #[must_use]
    pub const fn location(&self) -> LatLng {
        self.geometry.location
    }
}

/// One part of an address, e.g. the route or the postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Full name, e.g. `Alaska`
    #[serde(default)]
    pub long_name: String,

    /// Abbreviated name, e.g. `AK`
    #[serde(default)]
    pub short_name: String,

    /// Component type tags, e.g. `route` or `country`
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Check whether this component carries a type tag
    #[must_use]
    pub fn has_type(&self, component_type: &str) -> bool {
        self.types.iter().any(|t| t == component_type)
    }
}

/// Location information of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geocoded point
    pub location: LatLng,

    /// Precision classifier
    #[serde(default)]
    pub location_type: LocationType,

    /// Box fully containing the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,

    /// Recommended viewport for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Bounds>,
}

/// Open Location Code of a place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlusCode {
    /// Area code plus local code, e.g. `849VCWC8+R9`
    pub global_code: String,

    /// Local code with a locality, e.g. `CWC8+R9 Mountain View, CA, USA`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_result() -> GeocodingResult {
        let viewport = Bounds::new(
            LatLng::new_unchecked(37.4210, -122.0856),
            LatLng::new_unchecked(37.4238, -122.0829),
        );
        GeocodingResult {
            address_components: vec![
                AddressComponent {
                    long_name: "1600".to_string(),
                    short_name: "1600".to_string(),
                    types: vec!["street_number".to_string()],
                },
                AddressComponent {
                    long_name: "Amphitheatre Parkway".to_string(),
                    short_name: "Amphitheatre Pkwy".to_string(),
                    types: vec!["route".to_string()],
                },
            ],
            formatted_address: "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA"
                .to_string(),
            postcode_localities: vec!["Mountain View".to_string()],
            geometry: Geometry {
                location: LatLng::new_unchecked(37.4224, -122.0842),
                location_type: LocationType::Rooftop,
                bounds: Some(viewport),
                viewport: Some(viewport),
            },
            types: vec!["street_address".to_string()],
            partial_match: true,
            place_id: "ChIJ2eUgeAK6j4ARbn5u_wAGqWA".to_string(),
            plus_code: Some(PlusCode {
                global_code: "849VCWC8+W5".to_string(),
                compound_code: Some("CWC8+W5 Mountain View, CA, USA".to_string()),
            }),
        }
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            GeocodingStatus::OverQueryLimit.message(),
            "You are over your quota."
        );
        assert_eq!(
            GeocodingStatus::RequestDenied.message(),
            "Your request was denied."
        );
        for status in GeocodingStatus::ALL {
            assert!(!status.message().is_empty());
        }
    }

    #[test]
    fn test_status_codes_and_display() {
        assert_eq!(
            GeocodingStatus::ZeroResults.code(),
            "GEOCODING_CLIENT:ZERO_RESULTS"
        );
        assert_eq!(GeocodingStatus::OverDailyLimit.to_string(), "OVER_DAILY_LIMIT");
    }

    #[test]
    fn test_status_success_classification() {
        let successes: Vec<_> = GeocodingStatus::ALL
            .into_iter()
            .filter(GeocodingStatus::is_success)
            .collect();
        assert_eq!(
            successes,
            vec![GeocodingStatus::Ok, GeocodingStatus::ZeroResults]
        );
    }

    #[test]
    fn test_status_wire_names_match_serde() {
        for status in GeocodingStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_unrecognised_status_is_unknown_error() {
        let status: GeocodingStatus = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
        assert_eq!(status, GeocodingStatus::UnknownError);
    }

    #[test]
    fn test_location_type_parsing() {
        let lt: LocationType = serde_json::from_str(r#""RANGE_INTERPOLATED""#).unwrap();
        assert_eq!(lt, LocationType::RangeInterpolated);
        let lt: LocationType = serde_json::from_str(r#""NEW_KIND""#).unwrap();
        assert_eq!(lt, LocationType::Unknown);
    }

    #[test]
    fn test_full_result_roundtrip() {
        let response = GeocodingResponse {
            status: GeocodingStatus::Ok,
            results: vec![full_result()],
            error_message: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: GeocodingResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "status": "OK",
            "html_attributions": [],
            "results": [{
                "formatted_address": "Peine, Germany",
                "geometry": {
                    "location": { "lat": 52.3195, "lng": 10.2353, "alt": 0 },
                    "location_type": "APPROXIMATE",
                    "unexpected": true
                },
                "navigation_points": [{ "location": {} }],
                "place_id": "abc",
                "types": ["locality", "political"]
            }]
        }"#;
        let response: GeocodingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        let result = &response.results[0];
        assert_eq!(result.formatted_address, "Peine, Germany");
        assert_eq!(result.geometry.location_type, LocationType::Approximate);
        assert!(!result.partial_match);
        assert!(result.plus_code.is_none());
        assert!(result.address_components.is_empty());
    }

    #[test]
    fn test_zero_results_without_results_field() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"status":"ZERO_RESULTS"}"#).unwrap();
        assert_eq!(response.status, GeocodingStatus::ZeroResults);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_error_message_is_parsed() {
        let response: GeocodingResponse = serde_json::from_str(
            r#"{"status":"REQUEST_DENIED","error_message":"The provided API key is invalid.","results":[]}"#,
        )
        .unwrap();
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn test_component_lookup() {
        let result = full_result();
        assert_eq!(
            result.component("route").map(|c| c.short_name.as_str()),
            Some("Amphitheatre Pkwy")
        );
        assert!(result.component("country").is_none());
        assert!((result.location().lat() - 37.4224).abs() < f64::EPSILON);
    }
}
