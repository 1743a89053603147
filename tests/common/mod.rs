//! Common Test Utilities
//!
//! Shared helpers for building series, month slices and CSV fixtures.

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use step_heatmap::types::{MonthSeries, SeriesPoint};
use tempfile::TempDir;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Consecutive daily points starting at `start`, one per value
pub fn consecutive(start: NaiveDate, values: &[f64]) -> Vec<SeriesPoint> {
    start
        .iter_days()
        .zip(values)
        .map(|(d, v)| SeriesPoint::new(d, *v))
        .collect()
}

/// Every day of a month with value = day of month
pub fn full_month(year: i32, month: u32) -> MonthSeries {
    let points = date(year, month, 1)
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|d| SeriesPoint::new(d, d.day() as f64))
        .collect();
    MonthSeries {
        year,
        month,
        points,
    }
}

/// Write `lines` to `name` inside `dir`, returning the path
pub fn write_csv(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("Failed to create test CSV");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write CSV line");
    }
    path
}
