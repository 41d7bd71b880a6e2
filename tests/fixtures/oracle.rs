//! Deterministic oracles for tests.

use std::sync::Mutex;

use itinerary_planner::{Coordinates, DistanceOracle, TravelEstimate};

/// Travel time is the Manhattan distance in degrees times `minutes_per_degree`;
/// distance in km is the same figure. Listed coordinates can be made
/// unreachable or given a fixed travel time. Every query is recorded.
pub struct GridOracle {
    pub minutes_per_degree: f64,
    pub unreachable: Vec<Coordinates>,
    pub fixed: Vec<(Coordinates, f64)>,
    pub calls: Mutex<Vec<(Coordinates, Coordinates)>>,
}

impl GridOracle {
    pub fn new(minutes_per_degree: f64) -> Self {
        Self {
            minutes_per_degree,
            unreachable: Vec::new(),
            fixed: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_unreachable(mut self, lat: f64, lon: f64) -> Self {
        self.unreachable.push(Coordinates::new(lat, lon));
        self
    }

    pub fn with_fixed_minutes(mut self, lat: f64, lon: f64, minutes: f64) -> Self {
        self.fixed.push((Coordinates::new(lat, lon), minutes));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn queried(&self, to: Coordinates) -> bool {
        self.calls.lock().unwrap().iter().any(|(_, dest)| *dest == to)
    }
}

impl DistanceOracle for GridOracle {
    fn estimate(&self, from: Coordinates, to: Coordinates) -> TravelEstimate {
        self.calls.lock().unwrap().push((from, to));
        if self.unreachable.contains(&to) {
            return TravelEstimate::unreachable();
        }
        if let Some(&(_, minutes)) = self.fixed.iter().find(|(coords, _)| *coords == to) {
            return TravelEstimate::new(minutes, minutes);
        }
        let minutes = ((from.lat - to.lat).abs() + (from.lon - to.lon).abs()) * self.minutes_per_degree;
        TravelEstimate::new(minutes, minutes)
    }
}

/// An oracle whose every call fails.
pub struct DownOracle;

impl DistanceOracle for DownOracle {
    fn estimate(&self, _from: Coordinates, _to: Coordinates) -> TravelEstimate {
        TravelEstimate::unreachable()
    }
}
