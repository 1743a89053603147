//! Resolves highlight dates to month grid cells

use super::grid::{base_week, coordinate};
use crate::types::{GridCoordinate, Highlight, MonthSeries, ResolvedHighlight};
use chrono::Datelike;
use tracing::debug;

/// Cell of `highlight` in the grid built from `month`
///
/// Returns `None` unless the highlight date is one of the month's dates.
/// The cell's value is not inspected: a gap-filled date still resolves.
pub fn locate(highlight: &Highlight, month: &MonthSeries) -> Option<GridCoordinate> {
    if !month.contains(highlight.date) {
        return None;
    }
    let base = base_week(month.dates())?;
    Some(coordinate(highlight.date, base))
}

/// Resolve every highlight falling in `month`, in request order
pub fn resolve_all(highlights: &[Highlight], month: &MonthSeries) -> Vec<ResolvedHighlight> {
    highlights
        .iter()
        .filter_map(|h| {
            let Some(coordinate) = locate(h, month) else {
                debug!(
                    date = %h.date,
                    year = month.year,
                    month = month.month,
                    "highlight not in month, skipping overlay"
                );
                return None;
            };
            let on_missing_day = month
                .points
                .iter()
                .any(|p| p.date == h.date && p.is_missing());
            Some(ResolvedHighlight {
                date: h.date,
                label: h.label.clone(),
                coordinate,
                on_missing_day,
            })
        })
        .collect()
}

/// Keep only highlights dated in `year`, preserving order
pub fn for_year(highlights: &[Highlight], year: i32) -> Vec<Highlight> {
    highlights
        .iter()
        .filter(|h| h.date.year() == year)
        .cloned()
        .collect()
}
