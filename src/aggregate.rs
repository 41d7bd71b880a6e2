//! Groups work items into destinations, one per distinct location key.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Coordinates, Destination, WorkItem};
use crate::places::PlaceTable;

/// Builds one [`Destination`] per distinct location key, in first-seen order.
///
/// A destination's coordinates are resolved from the first item of its group:
/// explicit coordinates, else `places` by location label, else unlocated.
/// Items with a blank location label are skipped.
pub fn aggregate_destinations(items: &[WorkItem], places: &PlaceTable) -> Vec<Destination> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut destinations: Vec<Destination> = Vec::new();

    for item in items {
        let label = item.location.trim();
        if label.is_empty() {
            debug!(reference = %item.reference, "skipping work item without location");
            continue;
        }

        let key = item.key();
        if let Some(&index) = seen.get(key) {
            destinations[index].references.push(item.reference.clone());
            continue;
        }

        let coordinates = resolve_coordinates(item, label, places);
        if coordinates.is_unlocated() {
            debug!(location = label, "no coordinates for location, marking unlocated");
        }

        seen.insert(key.to_string(), destinations.len());
        destinations.push(Destination {
            key: key.to_string(),
            name: item
                .display_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(label)
                .to_string(),
            location: label.to_string(),
            coordinates,
            references: vec![item.reference.clone()],
        });
    }

    destinations
}

fn explicit_coordinates(item: &WorkItem) -> Option<Coordinates> {
    item.coordinates.filter(|coords| !coords.is_unlocated())
}

fn resolve_coordinates(item: &WorkItem, label: &str, places: &PlaceTable) -> Coordinates {
    explicit_coordinates(item)
        .or_else(|| places.lookup(label))
        .unwrap_or(Coordinates::UNLOCATED)
}
