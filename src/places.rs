//! Place name → coordinate lookup.
//!
//! The table is passed into the aggregator rather than read from a global, so
//! callers (and tests) can supply their own set of places.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::Coordinates;

/// Cities with a courthouse the default table knows about.
const DEFAULT_PLACES: &[(&str, f64, f64)] = &[
    ("Adana", 37.0000, 35.3213),
    ("Ankara", 39.9334, 32.8597),
    ("Antalya", 36.8969, 30.7133),
    ("Balıkesir", 39.6484, 27.8826),
    ("Bursa", 40.1828, 29.0667),
    ("Çanakkale", 40.1553, 26.4142),
    ("Denizli", 37.7765, 29.0864),
    ("Diyarbakır", 37.9144, 40.2306),
    ("Eskişehir", 39.7767, 30.5206),
    ("Gaziantep", 37.0662, 37.3833),
    ("İstanbul", 41.0082, 28.9784),
    ("İzmir", 38.4237, 27.1428),
    ("Kayseri", 38.7312, 35.4787),
    ("Kocaeli", 40.8533, 29.8815),
    ("Konya", 37.8746, 32.4932),
    ("Mersin", 36.8000, 34.6333),
    ("Sakarya", 40.7569, 30.3781),
    ("Samsun", 41.2928, 36.3313),
    ("Trabzon", 41.0027, 39.7168),
];

/// Lookup table from place labels to coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceTable {
    places: BTreeMap<String, Coordinates>,
}

impl PlaceTable {
    /// The built-in table of 19 Turkish cities.
    pub fn builtin() -> Self {
        DEFAULT_PLACES
            .iter()
            .map(|&(name, lat, lon)| (name.to_string(), Coordinates::new(lat, lon)))
            .collect()
    }

    /// Loads a table from a JSON object of `{"name": {"lat": .., "lon": ..}}`.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadPlaces {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::ParsePlaces {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Looks up a label, ignoring surrounding whitespace.
    pub fn lookup(&self, name: &str) -> Option<Coordinates> {
        self.places.get(name.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Coordinates)> {
        self.places.iter().map(|(name, coords)| (name.as_str(), *coords))
    }
}

impl<S: Into<String>> FromIterator<(S, Coordinates)> for PlaceTable {
    fn from_iter<I: IntoIterator<Item = (S, Coordinates)>>(iter: I) -> Self {
        Self {
            places: iter.into_iter().map(|(name, coords)| (name.into(), coords)).collect(),
        }
    }
}
