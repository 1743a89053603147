//! Calendar-shaped series and grid types

use super::common::SeriesPoint;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of weekday columns in every grid (Monday..Sunday)
pub const DAYS_PER_WEEK: usize = 7;

/// Contiguous daily series spanning whole calendar years
///
/// Built only by the gap filler: starts on 1 January, ends on 31 December and
/// holds exactly one point per date in between.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletedSeries {
    points: Vec<SeriesPoint>,
}

impl CompletedSeries {
    pub(crate) fn from_points(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Distinct calendar years covered, ascending
    pub fn years(&self) -> Vec<i32> {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => (first.year()..=last.year()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn missing_days(&self) -> usize {
        self.points.iter().filter(|p| p.is_missing()).count()
    }
}

/// One (year, month) slice of a series, dates ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSeries {
    pub year: i32,
    pub month: u32,
    pub points: Vec<SeriesPoint>,
}

impl MonthSeries {
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.points.iter().any(|p| p.date == date)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest real measurement in the month, ignoring missing days
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .filter_map(|p| p.value)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

/// Content of one grid cell
///
/// `Empty` means no date of the month addresses the cell (weekday slots before
/// day 1 or after the last day). `Missing` means a date maps there but has no
/// measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Missing,
    Value(f64),
}

impl Cell {
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Missing, Cell::Value)
    }
}

/// Week-by-weekday grid for one month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalendarGrid {
    rows: Vec<[Cell; DAYS_PER_WEEK]>,
}

impl CalendarGrid {
    /// Grid of `row_count` weeks with every cell `Empty`
    pub fn empty(row_count: usize) -> Self {
        Self {
            rows: vec![[Cell::Empty; DAYS_PER_WEEK]; row_count],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), DAYS_PER_WEEK)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    pub fn rows(&self) -> &[[Cell; DAYS_PER_WEEK]] {
        &self.rows
    }

    /// Rows as plain values, `None` for empty and missing cells
    pub fn value_rows(&self) -> Vec<Vec<Option<f64>>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::value).collect())
            .collect()
    }

    pub fn occupied_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| !c.is_empty())
            .count()
    }
}
