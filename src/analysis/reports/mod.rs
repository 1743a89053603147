//! Report formatting and output generation
//!
//! Provides formatting for heatmap reports via the [`ReportFormatter`] facade.
//! Supports Console, JSON, and Plotly output formats.

pub mod calendar;
pub mod utils;

use crate::config::HeatmapConfig;
use crate::errors::AppResult;
use crate::types::visualisation::PlotlyChart;
use crate::types::CalendarYearReport;

/// Output format options for heatmap reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Text calendar per month
    #[default]
    Console,
    /// Raw report (grids, indices, labels) for programmatic use
    Json,
    /// Plotly-compatible JSON, one heatmap chart per month
    Plotly,
}

impl OutputFormat {
    /// Parse a format name, falling back to Console for anything unknown
    pub fn parse(format_str: &str) -> Self {
        match format_str.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "plotly" => OutputFormat::Plotly,
            _ => OutputFormat::Console,
        }
    }

    /// Whether the output is a file artefact rather than terminal text
    pub fn is_file_output(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Plotly)
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_calendar(
        r: &CalendarYearReport,
        s: &HeatmapConfig,
        f: &OutputFormat,
    ) -> AppResult<String> {
        calendar::format_calendar(r, s, f)
    }

    pub fn plotly_charts(r: &CalendarYearReport, s: &HeatmapConfig) -> Vec<PlotlyChart> {
        calendar::to_plotly_charts(r, s)
    }
}
