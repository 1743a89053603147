//! Date to (week-row, weekday-column) mapping
//!
//! Rows follow ISO 8601 week numbers, corrected at the year boundary so every
//! date of a calendar year gets a distinct, chronologically ordered week:
//!
//! - late-December dates that ISO assigns to week 1 of the *next* year are
//!   placed after the year's own weeks (`week + 52`)
//! - early-January dates that ISO assigns to the last week of the *previous*
//!   year are placed before week 1 (week 0)
//!
//! Rows are then normalised per month so row 0 is the month's first week.

use crate::types::{CalendarGrid, Cell, GridCoordinate, MonthSeries};
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

/// Weeks added to dates that ISO places in week 1 of the following year
pub const YEAR_BOUNDARY_OFFSET: u32 = 52;

/// Corrected ISO week number used for row placement
pub fn week_index(date: NaiveDate) -> u32 {
    let iso = date.iso_week();
    match iso.year().cmp(&date.year()) {
        Ordering::Greater => iso.week() + YEAR_BOUNDARY_OFFSET,
        Ordering::Less => 0,
        Ordering::Equal => iso.week(),
    }
}

/// Weekday column, Monday = 0 .. Sunday = 6
pub fn weekday_column(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Smallest corrected week number among `dates`, the row-0 base of a month
pub fn base_week<I>(dates: I) -> Option<u32>
where
    I: IntoIterator<Item = NaiveDate>,
{
    dates.into_iter().map(week_index).min()
}

/// Cell of `date` in a grid whose row 0 is week `base`
pub fn coordinate(date: NaiveDate, base: u32) -> GridCoordinate {
    GridCoordinate::new(
        week_index(date).saturating_sub(base) as usize,
        weekday_column(date),
    )
}

/// Grid and index arrays for one month
///
/// `rows` and `cols` are parallel to the month's points.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub grid: CalendarGrid,
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    /// Corrected week number of row 0
    pub base_week: u32,
}

impl MonthGrid {
    pub fn coordinates(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .map(|(r, c)| GridCoordinate::new(*r, *c))
    }
}

/// Lay a month's points out on a week-by-weekday grid
///
/// Cells no date addresses stay `Cell::Empty`; dates without a measurement
/// become `Cell::Missing`. An empty month yields a zero-row grid.
pub fn map_month(month: &MonthSeries) -> MonthGrid {
    let Some(base) = base_week(month.dates()) else {
        return MonthGrid {
            grid: CalendarGrid::empty(0),
            rows: Vec::new(),
            cols: Vec::new(),
            base_week: 0,
        };
    };

    let (rows, cols): (Vec<usize>, Vec<usize>) = month
        .dates()
        .map(|d| {
            let c = coordinate(d, base);
            (c.row, c.col)
        })
        .unzip();

    let row_count = rows.iter().max().map_or(0, |max| max + 1);
    let mut grid = CalendarGrid::empty(row_count);
    for ((row, col), point) in rows.iter().zip(&cols).zip(&month.points) {
        grid.set(*row, *col, Cell::from(point.value));
    }

    MonthGrid {
        grid,
        rows,
        cols,
        base_week: base,
    }
}
