//! Error types for the fallible edges of the planner.
//!
//! Planning itself never fails; these cover configuration, input parsing and
//! the oracle's transport layer (which is always recovered internally).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading [`crate::config::PlannerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value of the wrong type.
    #[error("{var} has invalid value {value:?}")]
    InvalidValue {
        var: &'static str,
        value: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Only one of the home latitude/longitude pair was set.
    #[error("ITINERARY_HOME_LAT and ITINERARY_HOME_LON must be set together")]
    PartialHomeCoordinates,
    /// The place table file could not be read.
    #[error("failed to read place table at {path}")]
    ReadPlaces {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The place table file is not valid JSON of the expected shape.
    #[error("failed to parse place table at {path}")]
    ParsePlaces {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while parsing a start date designator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartDateError {
    #[error("start date is empty")]
    Empty,
    #[error("unrecognized start date {0:?}, expected YYYY-MM-DD, DD.MM.YYYY or YYYY-Www")]
    Unrecognized(String),
}

/// A single failed distance query.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("routing request failed")]
    Http(#[from] reqwest::Error),
    #[error("routing service answered {code:?}")]
    NoRoute { code: String },
}
