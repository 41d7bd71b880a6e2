//! Haversine travel estimates (fallback when no routing service is reachable).
//!
//! Uses great-circle distance and an assumed average speed.
//! Less accurate than OSRM (ignores roads) but always available.

use crate::model::{Coordinates, TravelEstimate};
use crate::traits::DistanceOracle;

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 60.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance oracle.
#[derive(Debug, Clone)]
pub struct HaversineOracle {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
    /// Multiplier from straight-line to road distance.
    pub road_factor: f64,
}

impl Default for HaversineOracle {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            road_factor: 1.0,
        }
    }
}

impl HaversineOracle {
    pub fn new(speed_kmh: f64) -> Self {
        Self {
            speed_kmh,
            ..Self::default()
        }
    }

    pub fn with_road_factor(mut self, road_factor: f64) -> Self {
        self.road_factor = road_factor;
        self
    }

    /// Calculate haversine distance between two points in kilometers.
    fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lon = (to.lon - from.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Convert distance in km to travel time in minutes.
    fn km_to_minutes(&self, km: f64) -> f64 {
        km / self.speed_kmh * 60.0
    }
}

impl DistanceOracle for HaversineOracle {
    fn estimate(&self, from: Coordinates, to: Coordinates) -> TravelEstimate {
        let km = Self::haversine_km(from, to) * self.road_factor;
        TravelEstimate::new(km, self.km_to_minutes(km))
    }
}
