//! Ten days straddling the January/February 2024 boundary

use crate::common::{consecutive, date};
use step_heatmap::analysis::HeatmapEngine;
use step_heatmap::calendar::{map_month, select_year, split_months};
use step_heatmap::config::HeatmapConfig;
use step_heatmap::types::{Cell, Highlight, SeriesPoint};

fn boundary_points() -> Vec<SeriesPoint> {
    let values: Vec<f64> = (1..=10).map(f64::from).collect();
    consecutive(date(2024, 1, 28), &values)
}

#[test]
fn test_partition_without_gap_fill() {
    let year_points = select_year(&boundary_points(), 2024);
    let months = split_months(&year_points);

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].month, 1);
    assert_eq!(
        months[0].dates().collect::<Vec<_>>(),
        (28..=31).map(|d| date(2024, 1, d)).collect::<Vec<_>>()
    );
    assert_eq!(months[1].month, 2);
    assert_eq!(
        months[1].dates().collect::<Vec<_>>(),
        (1..=6).map(|d| date(2024, 2, d)).collect::<Vec<_>>()
    );

    let jan = map_month(&months[0]);
    let feb = map_month(&months[1]);

    // January's last row and February's first row are the same ISO week
    let jan_last_row = *jan.rows.iter().max().unwrap() as u32;
    assert_eq!(jan.base_week + jan_last_row, feb.base_week);

    // Feb 1 is a Thursday
    assert_eq!(feb.rows[0], 0);
    assert_eq!(feb.cols[0], 3);
    assert_eq!(feb.grid.get(0, 3), Some(Cell::Value(5.0)));
}

#[test]
fn test_engine_report_after_gap_fill() {
    let engine = HeatmapEngine::new(HeatmapConfig::default());
    let highlights = vec![
        Highlight::new(date(2024, 2, 1), "Start of February"),
        Highlight::new(date(2025, 1, 1), "Next year"),
    ];

    let report = engine
        .build_from_points(&boundary_points(), None, &highlights)
        .unwrap();

    assert_eq!(report.year, 2024);
    assert_eq!(report.months.len(), 12);
    assert_eq!(report.days_with_data, 10);
    assert_eq!(report.missing_days, 366 - 10);
    assert_eq!(report.max_value, Some(10.0));
    assert_eq!(report.legend(), vec!["2024-02-01: Start of February"]);

    let jan = report.month(1).unwrap();
    let feb = report.month(2).unwrap();
    assert_eq!(
        jan.week_of_row(jan.last_row().unwrap()),
        feb.week_of_row(0)
    );
    assert_eq!(feb.highlights.len(), 1);
    assert_eq!(feb.highlights[0].coordinate, feb.coordinate_of(date(2024, 2, 1)).unwrap());
    assert!(!feb.highlights[0].on_missing_day);

    // Gap-filled days before the data show as missing, not empty
    assert_eq!(jan.grid.get(0, 0), Some(Cell::Missing));
}

#[test]
fn test_unknown_year_is_an_error() {
    let engine = HeatmapEngine::new(HeatmapConfig::default());
    let result = engine.build_from_points(&boundary_points(), Some(2019), &[]);

    assert!(matches!(
        result,
        Err(step_heatmap::errors::AppError::NoDataForYear(2019))
    ));
}
