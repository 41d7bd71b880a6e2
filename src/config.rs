//! Runtime configuration.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::model::Coordinates;
use crate::osrm::OsrmConfig;
use crate::places::PlaceTable;
use crate::solver::Origin;

const HOME_LABEL: &str = "Bursa Ofis";
const HOME_COORDINATES: Coordinates = Coordinates::new(40.1828, 29.0667);

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Default start location for every run.
    pub home: Origin,
    pub osrm: OsrmConfig,
    /// Optional JSON place table replacing the built-in one.
    pub places_file: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            home: Origin::new(HOME_LABEL, HOME_COORDINATES),
            osrm: OsrmConfig::default(),
            places_file: None,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let label = var("ITINERARY_HOME_LABEL").unwrap_or(defaults.home.label);
        let coordinates = match (
            parse_var::<f64>("ITINERARY_HOME_LAT", var("ITINERARY_HOME_LAT"))?,
            parse_var::<f64>("ITINERARY_HOME_LON", var("ITINERARY_HOME_LON"))?,
        ) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
            (None, None) => defaults.home.coordinates,
            _ => return Err(ConfigError::PartialHomeCoordinates),
        };

        let osrm = OsrmConfig {
            base_url: var("ITINERARY_OSRM_URL").unwrap_or(defaults.osrm.base_url),
            profile: var("ITINERARY_OSRM_PROFILE").unwrap_or(defaults.osrm.profile),
            timeout_secs: parse_var("ITINERARY_OSRM_TIMEOUT_SECS", var("ITINERARY_OSRM_TIMEOUT_SECS"))?
                .unwrap_or(defaults.osrm.timeout_secs),
        };

        Ok(Self {
            home: Origin::new(label, coordinates),
            osrm,
            places_file: var("ITINERARY_PLACES_FILE").map(PathBuf::from),
        })
    }

    /// The place table to use: the configured file, or the built-in table.
    pub fn load_places(&self) -> Result<PlaceTable, ConfigError> {
        match &self.places_file {
            Some(path) => PlaceTable::from_json_file(path),
            None => Ok(PlaceTable::builtin()),
        }
    }
}

fn parse_var<T>(name: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|raw| {
            raw.parse::<T>().map_err(|err| ConfigError::InvalidValue {
                var: name,
                value: raw,
                source: Box::new(err),
            })
        })
        .transpose()
}
