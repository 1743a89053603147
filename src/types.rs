//! Calendar Heatmap - Type System
//!
//! - `common`: Series and highlight types shared by every stage (SeriesPoint, Highlight, GridCoordinate)
//! - `calendar`: Completed series, month slices and the week-by-weekday grid
//! - `heatmap`: Per-year report handed to renderers
//! - `visualisation`: Plotly chart types

mod calendar;
mod common;
pub mod heatmap;
pub mod visualisation;

pub use calendar::*;
pub use common::*;

pub use heatmap::{CalendarYearReport, MonthAnchor, MonthHeatmap, ResolvedHighlight, ScaleTick};
