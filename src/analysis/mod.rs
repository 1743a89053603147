//! Calendar heatmap orchestration and reporting
//!
//! The [`HeatmapEngine`] runs the calendar pipeline for one year and produces a
//! [`CalendarYearReport`](crate::types::CalendarYearReport); the
//! [`ReportFormatter`] renders that report for the console, as raw JSON, or as
//! Plotly heatmap charts.
//!
//! ## Usage
//!
//! ```rust
//! use step_heatmap::analysis::{HeatmapEngine, OutputFormat, ReportFormatter};
//! use step_heatmap::config::HeatmapConfig;
//! use step_heatmap::errors::AppResult;
//! use step_heatmap::types::SeriesPoint;
//! use chrono::NaiveDate;
//!
//! fn example() -> AppResult<()> {
//!     let engine = HeatmapEngine::new(HeatmapConfig::default());
//!     let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
//!     let report = engine.build_from_points(&[SeriesPoint::new(date, 8000.0)], None, &[])?;
//!     let text = ReportFormatter::format_calendar(&report, engine.settings(), &OutputFormat::Console)?;
//!     print!("{}", text);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod heatmap_engine;
pub mod reports;

pub use heatmap_engine::HeatmapEngine;
pub use reports::{OutputFormat, ReportFormatter};
