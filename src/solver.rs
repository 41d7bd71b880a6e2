//! Greedy itinerary solver.
//!
//! At every step the solver asks the oracle how long it takes to reach each
//! remaining destination from the current position, picks the quickest one,
//! and schedules the visit on the business calendar. This is a nearest-neighbour
//! heuristic: it is deterministic, not optimal.

use chrono::NaiveDateTime;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::calendar::{planning_start, resolve_arrival, resolve_departure};
use crate::model::{Coordinates, Destination, PlanStep, TravelEstimate};
use crate::traits::DistanceOracle;

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Query the oracle for all candidates of a step in parallel.
    pub parallel_queries: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            parallel_queries: true,
        }
    }
}

/// Where the traveller currently is.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    pub label: String,
    pub coordinates: Coordinates,
}

impl Origin {
    pub fn new(label: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            label: label.into(),
            coordinates,
        }
    }
}

/// Travel estimate and calendar slot for one remaining destination at one step.
///
/// Lives only for the duration of a selection; destinations themselves never
/// carry travel data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEvaluation {
    /// Position in the remaining list at evaluation time.
    pub index: usize,
    pub estimate: TravelEstimate,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
}

/// Estimate for reaching `destination` from `from`.
///
/// Unlocated destinations get a fixed estimate without consulting the oracle.
pub fn evaluate<O: DistanceOracle>(
    oracle: &O,
    from: Coordinates,
    destination: &Destination,
) -> TravelEstimate {
    if destination.is_unlocated() {
        return TravelEstimate::UNLOCATED;
    }
    oracle.estimate(from, destination.coordinates)
}

/// Picks the remaining destination with the strictly smallest travel duration.
///
/// All candidates are evaluated before choosing; ties go to the earliest entry
/// in `remaining`. A candidate whose visit cannot be placed on the calendar
/// after leaving at `clock` counts as unreachable. Returns `None` if nothing is
/// reachable.
pub fn select_next<O: DistanceOracle>(
    oracle: &O,
    from: Coordinates,
    clock: NaiveDateTime,
    remaining: &[&Destination],
    parallel: bool,
) -> Option<CandidateEvaluation> {
    let estimates: Vec<TravelEstimate> = if parallel {
        remaining
            .par_iter()
            .map(|destination| evaluate(oracle, from, destination))
            .collect()
    } else {
        remaining
            .iter()
            .map(|destination| evaluate(oracle, from, destination))
            .collect()
    };

    let mut best: Option<CandidateEvaluation> = None;
    for (index, estimate) in estimates.into_iter().enumerate() {
        let destination = remaining[index];
        debug!(
            destination = %destination.key,
            duration_minutes = estimate.duration_minutes,
            "candidate evaluated"
        );
        if !estimate.is_reachable() {
            continue;
        }
        let better = match best {
            Some(current) => estimate.duration_minutes < current.estimate.duration_minutes,
            None => true,
        };
        if !better {
            continue;
        }
        let Some((arrival, departure)) = slot(clock, destination, estimate) else {
            warn!(
                destination = %destination.key,
                duration_minutes = estimate.duration_minutes,
                "travel estimate falls outside the calendar, skipping candidate"
            );
            continue;
        };
        best = Some(CandidateEvaluation {
            index,
            estimate,
            arrival,
            departure,
        });
    }

    best
}

/// Arrival and departure for a visit that leaves at `clock`.
fn slot(
    clock: NaiveDateTime,
    destination: &Destination,
    estimate: TravelEstimate,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let arrival = resolve_arrival(clock, estimate.duration_minutes)?;
    let departure = resolve_departure(arrival, destination.service_minutes())?;
    Some((arrival, departure))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Loop-local state of one planning run.
struct SchedulerState<'a> {
    position: Origin,
    clock: NaiveDateTime,
    remaining: Vec<&'a Destination>,
    steps: Vec<PlanStep>,
}

impl<'a> SchedulerState<'a> {
    fn new(destinations: &'a [Destination], origin: Origin, start: NaiveDateTime) -> Self {
        Self {
            position: origin,
            clock: planning_start(start.date()),
            remaining: destinations.iter().collect(),
            steps: Vec::with_capacity(destinations.len()),
        }
    }

    fn schedule(&self, destination: &Destination, choice: &CandidateEvaluation) -> PlanStep {
        PlanStep {
            step: self.steps.len() + 1,
            location: destination.location.clone(),
            name: destination.name.clone(),
            distance_km: round_to_tenth(choice.estimate.distance_km),
            arrival: choice.arrival,
            departure: choice.departure,
            references: destination.joined_references(),
        }
    }

    fn advance(&mut self, destination: &Destination, step: PlanStep) {
        self.position = Origin::new(destination.location.clone(), destination.coordinates);
        self.clock = step.departure;
        self.remaining.retain(|candidate| candidate.key != destination.key);
        self.steps.push(step);
    }
}

/// Orders `destinations` greedily and schedules each visit.
///
/// `start` is normalised to 09:00 on a business day before the first step.
/// The run ends when every destination is visited or none of the remaining
/// ones is reachable; in the latter case the partial itinerary is returned.
pub fn plan<O: DistanceOracle>(
    destinations: &[Destination],
    origin: Origin,
    start: NaiveDateTime,
    oracle: &O,
    options: &PlanOptions,
) -> Vec<PlanStep> {
    if destinations.is_empty() {
        return Vec::new();
    }

    let mut state = SchedulerState::new(destinations, origin, start);
    info!(
        destinations = destinations.len(),
        origin = %state.position.label,
        start = %state.clock,
        "planning itinerary"
    );

    while !state.remaining.is_empty() {
        let Some(choice) = select_next(
            oracle,
            state.position.coordinates,
            state.clock,
            &state.remaining,
            options.parallel_queries,
        ) else {
            warn!(
                unvisited = state.remaining.len(),
                from = %state.position.label,
                "no reachable destination left, stopping early"
            );
            break;
        };

        let destination = state.remaining[choice.index];
        let step = state.schedule(destination, &choice);
        debug!(
            step = step.step,
            destination = %destination.key,
            arrival = %step.arrival,
            departure = %step.departure,
            "scheduled visit"
        );
        state.advance(destination, step);
    }

    info!(steps = state.steps.len(), "itinerary planned");
    state.steps
}
