//! Shared series types used across ingestion, calendar mapping and reporting

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One calendar date and its aggregated measurement
///
/// `value` is `None` for days inserted by gap filling, so "no data" never
/// collides with a real measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
        }
    }

    /// Placeholder for a date with no measurement
    pub fn missing(date: NaiveDate) -> Self {
        Self { date, value: None }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Caller-supplied date to be marked on whichever month grid contains it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub date: NaiveDate,
    pub label: String,
}

impl Highlight {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }

    /// Legend text, e.g. "2024-02-11: Some random event"
    pub fn legend_entry(&self) -> String {
        format!("{}: {}", self.date.format("%Y-%m-%d"), self.label)
    }
}

/// Parses `DATE=LABEL` (label may be empty, date is `YYYY-MM-DD`)
impl FromStr for Highlight {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (date_str, label) = s
            .split_once('=')
            .ok_or_else(|| AppError::InvalidHighlight(format!("expected DATE=LABEL, got: {s}")))?;
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
            .map_err(|e| AppError::InvalidHighlight(format!("{}: {}", date_str.trim(), e)))?;
        Ok(Self::new(date, label.trim()))
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.legend_entry())
    }
}

/// Grid cell address within one month's grid
///
/// `row` is the local week index (0 = first occupied week), `col` is the
/// weekday index with Monday = 0 and Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
