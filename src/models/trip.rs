//! Trip planning request parameters

use serde::{Deserialize, Serialize};

/// The validated input parameters for one planning request.
///
/// Budget and duration carry no range validation; garbage in, garbage out,
/// the model sees them verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripRequest {
    /// Destination city name, as known to OpenStreetMap
    pub city: String,
    /// Trip budget in INR
    pub budget: i64,
    /// Trip duration in days
    pub duration: i64,
    /// Interest category, matched against the hobby tag map
    pub hobby: String,
}
