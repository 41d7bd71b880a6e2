//! itinerary-planner core
//!
//! Orders a set of destinations greedily by travel time and schedules each
//! visit on a 09:00–17:00, Monday–Friday business calendar.

pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod error;
pub mod haversine;
pub mod model;
pub mod osrm;
pub mod places;
pub mod planner;
pub mod solver;
pub mod traits;

pub use model::{Coordinates, Destination, PlanStep, TravelEstimate, WorkItem};
pub use planner::{ItineraryPlanner, PlanRequest};
pub use traits::DistanceOracle;
