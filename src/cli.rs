//! CLI argument parsing for the itinerary-planner binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "itinerary-planner", about = "Plan a multi-day visiting itinerary")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plan an itinerary from a JSON request and print it as JSON
    Plan {
        /// Request file (`-` for stdin)
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
        /// Start date or ISO week, overriding the request
        #[arg(long)]
        start: Option<String>,
        /// Start location label, overriding the request
        #[arg(long = "from")]
        start_location: Option<String>,
        /// Estimate travel with great-circle distances instead of OSRM
        #[arg(long)]
        offline: bool,
        /// Query the routing service one destination at a time
        #[arg(long)]
        sequential: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the place table in effect
    Places,
}
