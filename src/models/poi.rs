//! Point-of-interest model

use serde::{Deserialize, Serialize};

/// A named, geolocated place of potential interest to a traveler.
///
/// Created transiently per request from the Overpass response and discarded
/// after the response is sent. Coordinates are optional because Overpass
/// ways and relations may carry no node position.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PointOfInterest {
    /// Display name; "Unknown" when the element carries no name tag
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    pub lon: Option<f64>,
    /// The hobby category this POI was fetched for
    pub category: String,
}

impl PointOfInterest {
    /// Create a new POI
    #[must_use]
    pub fn new(name: String, lat: Option<f64>, lon: Option<f64>, category: String) -> Self {
        Self {
            name,
            lat,
            lon,
            category,
        }
    }

    /// Format the POI as a single prompt line, "name (category)"
    #[must_use]
    pub fn prompt_line(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}
