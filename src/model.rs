//! Planning data model: work items, aggregated destinations, travel estimates
//! and finalized plan steps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::SERVICE_MINUTES_PER_ITEM;

/// Display format used for plan timestamps (`17.10.2026 09:45`).
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// A geographic point (latitude, longitude).
///
/// `(0, 0)` is the "unlocated" sentinel: the location could not be resolved
/// and the oracle must not be asked about it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const UNLOCATED: Coordinates = Coordinates { lat: 0.0, lon: 0.0 };

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_unlocated(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

/// A pending work item as supplied by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Human-readable reference (e.g. a case number).
    pub reference: String,
    /// Location label, usually a city name.
    pub location: String,
    /// Stable grouping key. Falls back to `location` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_key: Option<String>,
    /// Name of the place to visit. Falls back to `location` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Explicit coordinates, taking precedence over the place table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl WorkItem {
    pub fn new(reference: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            location: location.into(),
            location_key: None,
            display_name: None,
            coordinates: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.location_key = Some(key.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.coordinates = Some(Coordinates::new(lat, lon));
        self
    }

    /// Key used to group items into destinations.
    pub fn key(&self) -> &str {
        self.location_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| self.location.trim())
    }
}

/// A physical stop with one or more pending work items.
///
/// Built once per planning run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub key: String,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub references: Vec<String>,
}

impl Destination {
    pub fn item_count(&self) -> usize {
        self.references.len()
    }

    /// On-site service time in minutes.
    pub fn service_minutes(&self) -> i64 {
        self.item_count() as i64 * SERVICE_MINUTES_PER_ITEM
    }

    pub fn is_unlocated(&self) -> bool {
        self.coordinates.is_unlocated()
    }

    /// References joined for display.
    pub fn joined_references(&self) -> String {
        self.references.join(", ")
    }
}

/// Travel distance and duration between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    pub distance_km: f64,
    pub duration_minutes: f64,
}

impl TravelEstimate {
    /// Fixed estimate used for destinations without coordinates.
    pub const UNLOCATED: TravelEstimate = TravelEstimate {
        distance_km: 100.0,
        duration_minutes: 60.0,
    };

    pub const fn new(distance_km: f64, duration_minutes: f64) -> Self {
        Self {
            distance_km,
            duration_minutes,
        }
    }

    /// Sentinel returned when the oracle could not answer.
    pub const fn unreachable() -> Self {
        Self {
            distance_km: f64::INFINITY,
            duration_minutes: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.duration_minutes.is_finite()
    }
}

/// One finalized stop of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// 1-based position in the itinerary.
    pub step: usize,
    /// Location label (city).
    pub location: String,
    /// Name of the place visited.
    pub name: String,
    /// One-way travel distance from the previous stop, rounded to 0.1 km.
    pub distance_km: f64,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
    /// Work item references handled at this stop, comma separated.
    pub references: String,
}

impl PlanStep {
    pub fn arrival_display(&self) -> String {
        self.arrival.format(DISPLAY_FORMAT).to_string()
    }

    pub fn departure_display(&self) -> String {
        self.departure.format(DISPLAY_FORMAT).to_string()
    }
}
