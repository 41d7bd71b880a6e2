//! OSRM HTTP adapter for point-to-point travel estimates.

use serde::Deserialize;
use tracing::warn;

use crate::error::OracleError;
use crate::model::{Coordinates, TravelEstimate};
use crate::traits::DistanceOracle;

#[derive(Debug, Clone, PartialEq)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, from: Coordinates, to: Coordinates) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.lon,
            from.lat,
            to.lon,
            to.lat
        )
    }

    /// Queries the route service, surfacing the failure reason.
    pub fn try_estimate(&self, from: Coordinates, to: Coordinates) -> Result<TravelEstimate, OracleError> {
        let body = self
            .client
            .get(self.route_url(from, to))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())?;

        estimate_from_response(body)
    }
}

impl DistanceOracle for OsrmClient {
    fn estimate(&self, from: Coordinates, to: Coordinates) -> TravelEstimate {
        match self.try_estimate(from, to) {
            Ok(estimate) => estimate,
            Err(err) => {
                warn!(
                    error = %err,
                    from = ?(from.lat, from.lon),
                    to = ?(to.lat, to.lon),
                    "OSRM estimate failed, treating destination as unreachable"
                );
                TravelEstimate::unreachable()
            }
        }
    }
}

fn estimate_from_response(body: OsrmRouteResponse) -> Result<TravelEstimate, OracleError> {
    if body.code != "Ok" {
        return Err(OracleError::NoRoute { code: body.code });
    }
    let route = body
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| OracleError::NoRoute { code: "NoRoutes".to_string() })?;

    Ok(TravelEstimate::new(route.distance / 1000.0, route.duration / 60.0))
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Metres.
    distance: f64,
    /// Seconds.
    duration: f64,
}
