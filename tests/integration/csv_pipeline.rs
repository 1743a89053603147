//! CSV file → report → rendered output

use crate::common::{date, write_csv};
use rand::rngs::StdRng;
use rand::SeedableRng;
use step_heatmap::analysis::{HeatmapEngine, OutputFormat, ReportFormatter};
use step_heatmap::config::{AppConfig, CsvConfig};
use step_heatmap::processor::{generate_series, write_series_csv, CsvSeriesLoader};
use step_heatmap::types::Highlight;
use tempfile::TempDir;

fn sample_csv(temp_dir: &TempDir) -> std::path::PathBuf {
    write_csv(
        temp_dir,
        "steps.csv",
        &[
            "Start;End;Steps",
            "2024-03-01 07:00:00;2024-03-01 08:00:00;4000",
            "2024-03-01 18:00:00;2024-03-01 19:00:00;6000",
            "2024-03-02 09:00:00;2024-03-02 10:00:00;12000",
            "2024-03-04 09:00:00;2024-03-04 10:00:00;19500",
        ],
    )
}

#[test]
fn test_csv_to_console_report() {
    let temp_dir = TempDir::new().unwrap();
    let points = CsvSeriesLoader::new(CsvConfig::default())
        .load_path(&sample_csv(&temp_dir))
        .unwrap();

    let config = AppConfig::builtin();
    let engine = HeatmapEngine::new(config.heatmap.clone());
    let highlights = vec!["2024-03-03=Rest day".parse::<Highlight>().unwrap()];
    let report = engine
        .build_from_points(&points, Some(2024), &highlights)
        .unwrap();

    assert_eq!(report.max_value, Some(19500.0));
    let march = report.month(3).unwrap();
    assert_eq!(march.highlights.len(), 1);
    assert!(march.highlights[0].on_missing_day);

    let console =
        ReportFormatter::format_calendar(&report, engine.settings(), &OutputFormat::Console)
            .unwrap();
    assert!(console.contains("Step counts heatmap (2024)"));
    assert!(console.contains("Mar 2024"));
    assert!(console.contains("2024-03-03: Rest day"));
    assert!(console.contains("[ 3]"));
}

#[test]
fn test_csv_to_plotly_charts() {
    let temp_dir = TempDir::new().unwrap();
    let points = CsvSeriesLoader::new(CsvConfig::default())
        .load_path(&sample_csv(&temp_dir))
        .unwrap();

    let engine = HeatmapEngine::new(AppConfig::builtin().heatmap);
    let report = engine.build_from_points(&points, None, &[]).unwrap();

    let json = ReportFormatter::format_calendar(&report, engine.settings(), &OutputFormat::Plotly)
        .unwrap();
    let charts: serde_json::Value = serde_json::from_str(&json).unwrap();
    let charts = charts.as_array().unwrap();

    assert_eq!(charts.len(), 12);
    let march = &charts[2];
    assert_eq!(march["data"][0]["type"], "heatmap");
    assert_eq!(march["data"][0]["zmin"], 0.0);
    assert_eq!(march["data"][0]["zmax"], 19500.0);
    // Mar 1, 2024 is a Friday in the first row
    assert_eq!(march["data"][0]["z"][0][4], 10000.0);
    assert!(march["data"][0]["z"][0][0].is_null());
}

#[test]
fn test_json_report_carries_index_arrays() {
    let temp_dir = TempDir::new().unwrap();
    let points = CsvSeriesLoader::new(CsvConfig::default())
        .load_path(&sample_csv(&temp_dir))
        .unwrap();

    let engine = HeatmapEngine::new(AppConfig::builtin().heatmap);
    let report = engine.build_from_points(&points, None, &[]).unwrap();
    let json =
        ReportFormatter::format_calendar(&report, engine.settings(), &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let march = &value["months"][2];
    assert_eq!(march["month"], 3);
    assert_eq!(march["dates"][0], "2024-03-01");
    assert_eq!(march["rows"][0], 0);
    assert_eq!(march["cols"][0], 4);
    assert_eq!(march["first_week"], 9);
}

#[test]
fn test_generated_series_round_trips_through_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("synthetic.csv");
    let config = AppConfig::builtin();

    let mut rng = StdRng::seed_from_u64(7);
    let generated = generate_series(date(2024, 2, 5), 200, 20000, &mut rng).unwrap();
    write_series_csv(&path, &generated, &config.csv).unwrap();

    let loaded = CsvSeriesLoader::new(config.csv.clone())
        .load_path(&path)
        .unwrap();
    assert_eq!(loaded, generated);

    let report = HeatmapEngine::new(config.heatmap)
        .build_from_points(&loaded, None, &[])
        .unwrap();
    assert_eq!(report.days_with_data, 200);

    // Aug 22 is the last generated day (Thursday), Aug 23 was gap filled
    let august = report.month(8).unwrap();
    let last = august.coordinate_of(date(2024, 8, 22)).unwrap();
    let after = august.coordinate_of(date(2024, 8, 23)).unwrap();
    assert!(august.grid.get(last.row, last.col).unwrap().value().is_some());
    assert!(august.grid.get(after.row, after.col).unwrap().is_missing());
}

#[test]
fn test_plotly_charts_share_colour_range() {
    let temp_dir = TempDir::new().unwrap();
    let points = CsvSeriesLoader::new(CsvConfig::default())
        .load_path(&sample_csv(&temp_dir))
        .unwrap();

    let engine = HeatmapEngine::new(AppConfig::builtin().heatmap);
    let highlights = vec![Highlight::new(date(2024, 3, 2), "Long walk")];
    let report = engine
        .build_from_points(&points, None, &highlights)
        .unwrap();
    let charts = ReportFormatter::plotly_charts(&report, engine.settings());

    assert_eq!(charts.len(), 12);
    assert!(charts
        .iter()
        .all(|c| c.data[0].zmin == Some(0.0) && c.data[0].zmax == Some(19500.0)));
    // Only March carries a highlight outline
    let outlined: Vec<usize> = charts
        .iter()
        .enumerate()
        .filter(|(_, c)| c.layout.shapes.as_ref().is_some_and(|s| !s.is_empty()))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(outlined, vec![2]);
}

#[test]
fn test_tiny_measurement_builds_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(&temp_dir, "tiny.csv", &["End;Steps", "2024-05-01;1e-323"]);
    let points = CsvSeriesLoader::new(CsvConfig::default())
        .load_path(&path)
        .unwrap();

    let report = HeatmapEngine::new(AppConfig::builtin().heatmap)
        .build_from_points(&points, None, &[])
        .unwrap();

    assert!(report.max_value.is_some_and(|m| m > 0.0));
    assert_eq!(report.scale.len(), 1);
    assert_eq!(report.scale[0].value, 0.0);
}
