//! Calendar heatmap builder for daily measurement series
//!
//! Turns a sparse daily series (step counts by default) into one week-by-weekday
//! grid per month, with tick labels and highlight coordinates ready for
//! plotting.
//!
//! Pipeline: gap fill → year selection → month split → grid mapping → labels
//! and highlights. See [`analysis::HeatmapEngine`] for the orchestrator.

pub mod analysis;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod errors;
pub mod processor;
pub mod types;
pub mod utils;
