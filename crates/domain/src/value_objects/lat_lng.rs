//! Latitude/longitude value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic point in degrees, as exchanged with the geocoding provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees (-90 to 90)
    lat: f64,
    /// Longitude in degrees (-180 to 180)
    lng: f64,
}

impl LatLng {
    /// Create a new point with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinates {
                latitude: lat,
                longitude: lng,
            });
        }
        Ok(Self { lat, lng })
    }

    /// Create a point without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Calculate approximate distance to another point in kilometers
    ///
    /// Uses the Haversine formula for great-circle distance
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lng / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Renders the `lat,lng` pair used by the provider's `bounds` parameter
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let point = LatLng::new(52.52, 13.405).expect("valid coordinates");
        assert!((point.lat() - 52.52).abs() < f64::EPSILON);
        assert!((point.lng() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(LatLng::new(90.0, 180.0).is_ok());
        assert!(LatLng::new(-90.0, -180.0).is_ok());
        assert!(LatLng::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(LatLng::new(91.0, 0.0).is_err());
        assert!(LatLng::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(LatLng::new(0.0, 181.0).is_err());
        assert!(LatLng::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_display_is_wire_format() {
        let point = LatLng::new_unchecked(34.172684, -118.604794);
        assert_eq!(point.to_string(), "34.172684,-118.604794");
    }

    #[test]
    fn test_distance_same_point() {
        let point = LatLng::new_unchecked(52.52, 13.405);
        assert!(point.distance_km(&point).abs() < 0.001);
    }

    #[test]
    fn test_distance_berlin_london() {
        let berlin = LatLng::new_unchecked(52.52, 13.405);
        let london = LatLng::new_unchecked(51.5074, -0.1278);
        let distance = berlin.distance_km(&london);
        // Berlin to London is approximately 930km
        assert!((distance - 930.0).abs() < 50.0);
    }

    #[test]
    fn test_json_field_names() {
        let point = LatLng::new_unchecked(52.52, 13.405);
        let json = serde_json::to_value(point).expect("serialize");
        assert_eq!(json, serde_json::json!({ "lat": 52.52, "lng": 13.405 }));

        let parsed: LatLng = serde_json::from_value(json).expect("deserialize");
        assert_eq!(parsed, point);
    }
}
