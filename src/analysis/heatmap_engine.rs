//! Drives the calendar pipeline for one selected year

use crate::calendar::{self, highlight, labels};
use crate::config::HeatmapConfig;
use crate::errors::{AppError, AppResult};
use crate::types::{
    CalendarYearReport, CompletedSeries, Highlight, MonthHeatmap, MonthSeries, SeriesPoint,
};
use tracing::{debug, info, warn};

/// Calendar heatmap engine
///
/// Holds presentation settings only; every build is a pure transform of its
/// inputs.
pub struct HeatmapEngine {
    settings: HeatmapConfig,
}

impl HeatmapEngine {
    pub fn new(settings: HeatmapConfig) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &HeatmapConfig {
        &self.settings
    }

    /// Gap-fill `points` and build the report for `year`
    ///
    /// With no `year`, the first year present in the data is used.
    ///
    /// # Errors
    /// * `AppError::EmptyInput` if `points` is empty
    /// * `AppError::NoDataForYear` if `year` lies outside the data's years
    pub fn build_from_points(
        &self,
        points: &[SeriesPoint],
        year: Option<i32>,
        highlights: &[Highlight],
    ) -> AppResult<CalendarYearReport> {
        let completed = calendar::fill_gaps(points)?;
        let year = match year {
            Some(y) => y,
            None => *completed.years().first().ok_or(AppError::EmptyInput)?,
        };
        self.build_year(&completed, year, highlights)
    }

    /// Build every month panel of `year` from an already completed series
    pub fn build_year(
        &self,
        series: &CompletedSeries,
        year: i32,
        highlights: &[Highlight],
    ) -> AppResult<CalendarYearReport> {
        let year_points = calendar::select_year(series.points(), year);
        if year_points.is_empty() {
            warn!(
                year,
                available = ?series.years(),
                "requested year not present in series"
            );
            return Err(AppError::NoDataForYear(year));
        }

        let year_highlights = highlight::for_year(highlights, year);
        if year_highlights.len() < highlights.len() {
            debug!(
                dropped = highlights.len() - year_highlights.len(),
                year, "ignoring highlights outside selected year"
            );
        }

        let month_series = calendar::split_months(&year_points);
        let max_value = calendar::global_max(&month_series);
        let months: Vec<MonthHeatmap> = month_series
            .iter()
            .map(|m| Self::build_month(m, &year_highlights))
            .collect();

        let missing_days = year_points.iter().filter(|p| p.is_missing()).count();
        let scale = calendar::scale_ticks(
            max_value,
            self.settings.scale_ticks,
            self.settings.distance_per_unit,
        );

        info!(
            year,
            months = months.len(),
            missing_days,
            max_value = ?max_value,
            highlights = year_highlights.len(),
            "built calendar heatmap"
        );

        Ok(CalendarYearReport {
            year,
            max_value,
            days_with_data: year_points.len() - missing_days,
            missing_days,
            months,
            highlights: year_highlights,
            scale,
        })
    }

    /// Grid, labels and resolved highlights for a single month
    pub fn build_month(month: &MonthSeries, highlights: &[Highlight]) -> MonthHeatmap {
        let mapped = calendar::map_month(month);
        let dates: Vec<_> = month.dates().collect();
        let day_labels = labels::day_labels(
            mapped.grid.row_count(),
            &dates,
            &mapped.rows,
            &mapped.cols,
        );
        let month_anchors = labels::month_anchors(&dates, &mapped.rows);
        let resolved = highlight::resolve_all(highlights, month);
        for h in resolved.iter().filter(|h| h.on_missing_day) {
            warn!(date = %h.date, label = %h.label, "highlight falls on a day without data");
        }

        MonthHeatmap {
            year: month.year,
            month: month.month,
            name: labels::month_name(month.month)
                .unwrap_or_default()
                .to_string(),
            first_week: mapped.base_week,
            grid: mapped.grid,
            dates,
            rows: mapped.rows,
            cols: mapped.cols,
            day_labels,
            weekday_labels: labels::weekday_labels(),
            month_anchors,
            highlights: resolved,
        }
    }
}
