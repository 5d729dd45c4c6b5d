//! Great-circle distance.

use serde::{Deserialize, Serialize};

use crate::core::config::DistanceUnit;

/// Latitude/longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Haversine distance between two points on a spherical Earth.
///
/// ```
/// use arcade_rules::games::where_in_world::{haversine, Coordinate, DistanceUnit};
///
/// let london = Coordinate::new(51.5074, -0.1278);
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let miles = haversine(london, paris, DistanceUnit::Miles);
/// assert!((miles - 213.5).abs() < 0.5);
/// ```
#[must_use]
pub fn haversine(a: Coordinate, b: Coordinate, unit: DistanceUnit) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    // Rounding can push h a hair past 1 for antipodal points
    2.0 * unit.earth_radius() * h.sqrt().min(1.0).asin()
}
