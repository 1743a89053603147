use crate::common::{date, full_month};
use std::collections::HashSet;
use step_heatmap::calendar::{map_month, week_index, weekday_column};
use step_heatmap::types::{Cell, GridCoordinate, MonthSeries, SeriesPoint};

#[test]
fn test_every_month_maps_one_to_one() {
    for year in 2019..=2028 {
        for month in 1..=12 {
            let series = full_month(year, month);
            let mapped = map_month(&series);

            let coords: HashSet<GridCoordinate> = mapped.coordinates().collect();
            assert_eq!(
                coords.len(),
                series.points.len(),
                "collision in {}-{:02}",
                year,
                month
            );
            assert_eq!(mapped.grid.occupied_cells(), series.points.len());
            assert!(mapped.grid.row_count() <= 6, "{}-{:02}", year, month);
        }
    }
}

#[test]
fn test_rows_never_decrease_within_month() {
    for year in 2019..=2028 {
        for month in [1, 12] {
            let mapped = map_month(&full_month(year, month));
            assert!(
                mapped.rows.windows(2).all(|w| w[0] <= w[1]),
                "rows out of order in {}-{:02}: {:?}",
                year,
                month,
                mapped.rows
            );
        }
    }
}

#[test]
fn test_january_2024_boundary() {
    // Dec 31, 2023 closes ISO week 52 of 2023; Jan 1, 2024 opens week 1
    assert_eq!(week_index(date(2023, 12, 31)), 52);
    assert_eq!(week_index(date(2024, 1, 1)), 1);

    let mapped = map_month(&full_month(2024, 1));

    assert_eq!(mapped.base_week, 1);
    assert_eq!(mapped.grid.shape(), (5, 7));
    assert_eq!(mapped.rows[0], 0);
    assert_eq!(mapped.cols[0], 0);
    // Jan 31 is a Wednesday in week 5
    assert_eq!(mapped.rows[30], 4);
    assert_eq!(mapped.cols[30], 2);
}

#[test]
fn test_january_days_in_previous_iso_year() {
    // Jan 1-3, 2021 belong to ISO week 53 of 2020
    assert_eq!(week_index(date(2021, 1, 1)), 0);
    assert_eq!(week_index(date(2021, 1, 4)), 1);

    let mapped = map_month(&full_month(2021, 1));

    assert_eq!(mapped.base_week, 0);
    assert_eq!(mapped.rows[0], 0);
    assert_eq!(mapped.cols[0], weekday_column(date(2021, 1, 1)));
    assert_eq!(mapped.cols[0], 4);
    assert_eq!(mapped.rows[3], 1);
    assert_eq!(mapped.cols[3], 0);
}

#[test]
fn test_december_days_in_next_iso_year() {
    // Dec 30-31, 2024 belong to ISO week 1 of 2025
    assert_eq!(week_index(date(2024, 12, 30)), 53);

    let mapped = map_month(&full_month(2024, 12));

    assert_eq!(mapped.base_week, 48);
    assert_eq!(mapped.grid.row_count(), 6);
    assert_eq!(mapped.rows[29], 5);
    assert_eq!(mapped.rows[30], 5);
    assert_eq!(mapped.cols[30], 1);
}

#[test]
fn test_missing_and_empty_cells_are_distinct() {
    let series = MonthSeries {
        year: 2024,
        month: 2,
        points: vec![
            SeriesPoint::new(date(2024, 2, 1), 4200.0),
            SeriesPoint::missing(date(2024, 2, 2)),
        ],
    };

    let mapped = map_month(&series);

    // Thursday and Friday of the first row
    assert_eq!(mapped.grid.get(0, 3), Some(Cell::Value(4200.0)));
    assert_eq!(mapped.grid.get(0, 4), Some(Cell::Missing));
    assert_eq!(mapped.grid.get(0, 0), Some(Cell::Empty));
    assert_eq!(mapped.grid.get(1, 0), None);
}
