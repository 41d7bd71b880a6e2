//! itinerary-planner - command-line front end for the itinerary planner.

mod cli;

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use itinerary_planner::config::PlannerConfig;
use itinerary_planner::haversine::HaversineOracle;
use itinerary_planner::osrm::OsrmClient;
use itinerary_planner::solver::PlanOptions;
use itinerary_planner::traits::DistanceOracle;
use itinerary_planner::{ItineraryPlanner, PlanRequest};

use cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,itinerary_planner=debug".into()),
        ))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlannerConfig::from_env().context("invalid configuration")?;
    let places = config.load_places().context("failed to load place table")?;

    match cli.command {
        Command::Places => {
            for (name, coords) in places.iter() {
                println!("{name}\t{:.4}\t{:.4}", coords.lat, coords.lon);
            }
        }
        Command::Plan {
            input,
            start,
            start_location,
            offline,
            sequential,
            pretty,
        } => {
            let raw = if input.as_os_str() == "-" {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read request from stdin")?;
                buf
            } else {
                fs::read_to_string(&input)
                    .with_context(|| format!("failed to read request {}", input.display()))?
            };
            let mut request: PlanRequest =
                serde_json::from_str(&raw).context("request is not a valid plan request")?;
            if start.is_some() {
                request.start = start;
            }
            if start_location.is_some() {
                request.start_location = start_location;
            }

            let oracle: Box<dyn DistanceOracle> = if offline {
                info!("using great-circle estimates");
                Box::new(HaversineOracle::default())
            } else {
                info!(base_url = %config.osrm.base_url, "using OSRM route service");
                Box::new(OsrmClient::new(config.osrm.clone()).context("failed to build HTTP client")?)
            };

            let planner = ItineraryPlanner::new(oracle, places, config.home.clone()).with_options(PlanOptions {
                parallel_queries: !sequential,
            });
            let steps = planner.plan(&request);

            let output = if pretty {
                serde_json::to_string_pretty(&steps)?
            } else {
                serde_json::to_string(&steps)?
            };
            println!("{output}");
        }
    }

    Ok(())
}
