//! Series ingestion: CSV loading, daily aggregation and synthetic generation

pub mod csv_processor;
pub mod synthetic;

pub use csv_processor::*;
pub use synthetic::generate_series;

use crate::types::SeriesPoint;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sum values sharing a calendar date, ascending by date
///
/// A date whose points are all missing stays missing.
pub fn aggregate_daily<I>(points: I) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = SeriesPoint>,
{
    let mut by_date: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for point in points {
        let slot = by_date.entry(point.date).or_insert(None);
        if let Some(v) = point.value {
            *slot = Some(slot.unwrap_or(0.0) + v);
        }
    }
    by_date
        .into_iter()
        .map(|(date, value)| SeriesPoint { date, value })
        .collect()
}
