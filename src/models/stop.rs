//! Stop type.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used for haversine distances.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A stop (or depot) to be visited.
///
/// Stop 0 is conventionally the depot when depot anchoring is used. The
/// optimization core only ever sees matrix indices; this type exists so
/// callers can build a straight-line cost matrix and map a computed order
/// back to the points it refers to.
///
/// # Examples
///
/// ```
/// use tour_opt::models::Stop;
///
/// let depot = Stop::depot("Warehouse", 52.23, 21.01);
/// assert_eq!(depot.id(), 0);
/// assert!(depot.is_depot());
///
/// let s = Stop::new(1, "Client A", 52.40, 16.93);
/// assert_eq!(s.id(), 1);
/// assert!(!s.is_depot());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    id: usize,
    label: String,
    lat: f64,
    lon: f64,
    depot: bool,
}

impl Stop {
    /// Creates a new stop at the given coordinates (degrees).
    pub fn new(id: usize, label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            label: label.into(),
            lat,
            lon,
            depot: false,
        }
    }

    /// Creates a depot stop at the given coordinates (id = 0).
    pub fn depot(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            depot: true,
            ..Self::new(0, label, lat, lon)
        }
    }

    /// Stop ID — its row/column in the cost matrix.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Human-readable label (typically the address the stop was resolved from).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if this stop is the depot.
    pub fn is_depot(&self) -> bool {
        self.depot
    }

    /// Great-circle (haversine) distance to another stop, in meters.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * h.sqrt().asin()
    }
}
