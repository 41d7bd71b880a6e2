//! End-to-end planning: work items in, timestamped itinerary out.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::aggregate_destinations;
use crate::calendar::resolve_start;
use crate::model::{PlanStep, WorkItem};
use crate::places::PlaceTable;
use crate::solver::{plan, Origin, PlanOptions};
use crate::traits::DistanceOracle;

/// A planning request as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub items: Vec<WorkItem>,
    /// Label of the start location; the home location when absent.
    #[serde(default)]
    pub start_location: Option<String>,
    /// Start date (`YYYY-MM-DD`, `DD.MM.YYYY`) or ISO week (`YYYY-Www`).
    #[serde(default)]
    pub start: Option<String>,
}

/// Plans itineraries against one oracle and place table.
#[derive(Debug, Clone)]
pub struct ItineraryPlanner<O> {
    oracle: O,
    places: PlaceTable,
    home: Origin,
    options: PlanOptions,
}

impl<O: DistanceOracle> ItineraryPlanner<O> {
    pub fn new(oracle: O, places: PlaceTable, home: Origin) -> Self {
        Self {
            oracle,
            places,
            home,
            options: PlanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PlanOptions) -> Self {
        self.options = options;
        self
    }

    /// Plans `request`, starting today when it names no start date.
    pub fn plan(&self, request: &PlanRequest) -> Vec<PlanStep> {
        self.plan_from(request, Local::now().date_naive())
    }

    /// Plans `request` with an explicit notion of "today".
    pub fn plan_from(&self, request: &PlanRequest, today: NaiveDate) -> Vec<PlanStep> {
        let destinations = aggregate_destinations(&request.items, &self.places);
        if destinations.is_empty() {
            return Vec::new();
        }

        let origin = self.resolve_origin(request.start_location.as_deref());
        let start = resolve_start(request.start.as_deref(), today);
        plan(&destinations, origin, start, &self.oracle, &self.options)
    }

    /// Start position for a label: home, a known place, or home as fallback.
    pub fn resolve_origin(&self, label: Option<&str>) -> Origin {
        let Some(label) = label.map(str::trim).filter(|label| !label.is_empty()) else {
            return self.home.clone();
        };
        if label == self.home.label {
            return self.home.clone();
        }
        match self.places.lookup(label) {
            Some(coordinates) => Origin::new(label, coordinates),
            None => {
                warn!(label, home = %self.home.label, "unknown start location, starting from home");
                self.home.clone()
            }
        }
    }
}
