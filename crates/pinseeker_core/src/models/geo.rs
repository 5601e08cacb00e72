use serde::{Deserialize, Serialize};

/// Geographic position in WGS84-ish degrees.
///
/// The atomic coordinate type used everywhere in the engine. All geodesic
/// math treats the Earth as a sphere; see the `geodesy` module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
