//! Calendar grid pipeline
//!
//! Raw series -> [`gap_fill`] -> [`partition::select_year`] ->
//! [`partition::split_months`] -> per month [`grid::map_month`], then
//! [`labels`] and [`highlight`] on the month's index arrays.
//!
//! Everything here is a pure function of its inputs; months are independent
//! and can be processed in any order.

pub mod gap_fill;
pub mod grid;
pub mod highlight;
pub mod labels;
pub mod partition;
pub mod scale;

pub use gap_fill::fill_gaps;
pub use grid::{map_month, week_index, weekday_column, MonthGrid};
pub use highlight::locate;
pub use labels::{month_anchors, WEEKDAY_LABELS};
pub use partition::{select_year, split_months};
pub use scale::{global_max, scale_ticks};
