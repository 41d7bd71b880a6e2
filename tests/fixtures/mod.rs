//! Test fixtures for itinerary-planner.
//!
//! Provides realistic test data including:
//! - Courthouse locations across Turkey
//! - A deterministic table-driven distance oracle

pub mod courthouses;
pub mod oracle;

pub use courthouses::*;
pub use oracle::*;
