//! Bounding box value object

use serde::{Deserialize, Serialize};

use super::LatLng;

/// A rectangular area given by its southwest and northeast corners
///
/// Both corners are optional on the wire; a box is only usable as a request
/// parameter once both are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Northeast corner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub northeast: Option<LatLng>,
    /// Southwest corner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub southwest: Option<LatLng>,
}

impl Bounds {
    /// Create a complete bounding box
    #[must_use]
    pub const fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            northeast: Some(northeast),
            southwest: Some(southwest),
        }
    }

    /// Both corners are present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.northeast.is_some() && self.southwest.is_some()
    }

    /// Render as `southwest|northeast`, or `None` if a corner is missing
    #[must_use]
    pub fn to_param(&self) -> Option<String> {
        match (self.southwest, self.northeast) {
            (Some(sw), Some(ne)) => Some(format!("{sw}|{ne}")),
            _ => None,
        }
    }

    /// Check whether a point lies inside the box (edges inclusive)
    ///
    /// Boxes crossing the antimeridian (southwest longitude greater than
    /// northeast longitude) are handled. Incomplete boxes contain nothing.
    #[must_use]
    pub fn contains(&self, point: &LatLng) -> bool {
        let (Some(sw), Some(ne)) = (self.southwest, self.northeast) else {
            return false;
        };

        let lat_ok = (sw.lat()..=ne.lat()).contains(&point.lat());
        let lng_ok = if sw.lng() <= ne.lng() {
            (sw.lng()..=ne.lng()).contains(&point.lng())
        } else {
            point.lng() >= sw.lng() || point.lng() <= ne.lng()
        };

        lat_ok && lng_ok
    }
}
