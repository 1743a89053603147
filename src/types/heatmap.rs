//! Calendar heatmap report types

use super::calendar::CalendarGrid;
use super::common::{GridCoordinate, Highlight};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one year of month panels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarYearReport {
    /// Selected calendar year
    pub year: i32,

    /// Largest measurement across all months, for a shared colour scale
    ///
    /// `None` when every day of the year is missing.
    pub max_value: Option<f64>,

    /// Days in the year carrying a measurement
    pub days_with_data: usize,

    /// Days in the year inserted by gap filling
    pub missing_days: usize,

    /// One panel per month, in month order
    pub months: Vec<MonthHeatmap>,

    /// Highlights requested for this year (legend order)
    pub highlights: Vec<Highlight>,

    /// Colour scale ticks with their distance conversion
    pub scale: Vec<ScaleTick>,
}

impl CalendarYearReport {
    pub fn month(&self, month: u32) -> Option<&MonthHeatmap> {
        self.months.iter().find(|m| m.month == month)
    }

    /// Legend lines in request order
    pub fn legend(&self) -> Vec<String> {
        self.highlights.iter().map(Highlight::legend_entry).collect()
    }
}

/// Grid, index arrays and labels for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthHeatmap {
    pub year: i32,
    pub month: u32,

    /// Abbreviated month name ("Jan".."Dec")
    pub name: String,

    /// Corrected week number represented by row 0
    pub first_week: u32,

    pub grid: CalendarGrid,

    /// Dates of the month, ascending; parallel to `rows` and `cols`
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,

    /// Day-of-month number per cell, `None` where no date maps
    pub day_labels: Vec<[Option<u32>; 7]>,

    /// Column labels, Monday first
    pub weekday_labels: Vec<String>,

    /// Month label positions along the row axis
    pub month_anchors: Vec<MonthAnchor>,

    /// Highlights whose date falls in this month
    pub highlights: Vec<ResolvedHighlight>,
}

impl MonthHeatmap {
    /// Corrected week number shown by `row`
    pub fn week_of_row(&self, row: usize) -> u32 {
        self.first_week + row as u32
    }

    pub fn last_row(&self) -> Option<usize> {
        self.rows.iter().copied().max()
    }

    pub fn coordinate_of(&self, date: NaiveDate) -> Option<GridCoordinate> {
        self.dates
            .iter()
            .position(|d| *d == date)
            .map(|i| GridCoordinate::new(self.rows[i], self.cols[i]))
    }
}

/// Month label centred against its block of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAnchor {
    pub month: u32,
    pub name: String,
    /// Median row index of the month's dates
    pub position: f64,
}

/// Highlight resolved to a cell of a specific month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedHighlight {
    pub date: NaiveDate,
    pub label: String,
    pub coordinate: GridCoordinate,
    /// The date was gap-filled; the outline sits on a cell with no measurement
    pub on_missing_day: bool,
}

/// One colour-scale tick and its converted distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTick {
    pub value: f64,
    pub distance: f64,
}
