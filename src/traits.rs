//! Core seams of the planner.
//!
//! The planner only needs one external collaborator: something that can
//! estimate travel between two points. Concrete backends (OSRM, haversine,
//! test doubles) implement [`DistanceOracle`].

use crate::model::{Coordinates, TravelEstimate};

/// Estimates travel distance and duration between two coordinates.
///
/// Implementations must never fail loudly: any error (timeout, bad status,
/// malformed body) is reported as [`TravelEstimate::unreachable`]. Calls may be
/// issued concurrently from several threads, hence the `Sync` bound.
pub trait DistanceOracle: Sync {
    fn estimate(&self, from: Coordinates, to: Coordinates) -> TravelEstimate;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn estimate(&self, from: Coordinates, to: Coordinates) -> TravelEstimate {
        (**self).estimate(from, to)
    }
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for Box<T> {
    fn estimate(&self, from: Coordinates, to: Coordinates) -> TravelEstimate {
        (**self).estimate(from, to)
    }
}
