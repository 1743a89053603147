use crate::common::{date, write_csv};
use step_heatmap::config::CsvConfig;
use step_heatmap::errors::AppError;
use step_heatmap::processor::{write_series_csv, CsvSeriesLoader};
use step_heatmap::types::SeriesPoint;
use tempfile::TempDir;

#[test]
fn test_load_timestamps_and_sum_per_day() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(
        &temp_dir,
        "steps.csv",
        &[
            "# exported by phone app",
            "Start;End;Steps",
            "2024-02-05 07:00:00;2024-02-05 08:00:00;1500",
            "2024-02-05 17:00:00;2024-02-05 18:00:00;2500",
            "2024-02-07 07:00:00;2024-02-07 08:00:00;900",
        ],
    );

    let points = CsvSeriesLoader::new(CsvConfig::default())
        .load_path(&path)
        .unwrap();

    assert_eq!(
        points,
        vec![
            SeriesPoint::new(date(2024, 2, 5), 4000.0),
            SeriesPoint::new(date(2024, 2, 7), 900.0),
        ]
    );
}

#[test]
fn test_bad_date_reports_line() {
    let data = "Start;End;Steps\n2024-02-05;2024-02-05;10\nx;yesterday;20\n";
    let result = CsvSeriesLoader::new(CsvConfig::default()).load_reader(data.as_bytes());

    match result {
        Err(AppError::DateParse { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "yesterday");
        }
        other => panic!("expected DateParse, got {:?}", other),
    }
}

#[test]
fn test_negative_value_rejected() {
    let data = "End;Steps\n2024-02-05;-10\n";
    let result = CsvSeriesLoader::new(CsvConfig::default()).load_reader(data.as_bytes());
    assert!(matches!(result, Err(AppError::InvalidData(_))));
}

#[test]
fn test_missing_column_rejected() {
    let data = "Date;Count\n2024-02-05;10\n";
    let result = CsvSeriesLoader::new(CsvConfig::default()).load_reader(data.as_bytes());
    assert!(matches!(result, Err(AppError::InvalidData(msg)) if msg.contains("End")));
}

#[test]
fn test_custom_layout_and_written_series_reload() {
    let config = CsvConfig {
        separator: ',',
        date_column: "day".to_string(),
        value_column: "km".to_string(),
    };
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("series.csv");
    let series = vec![
        SeriesPoint::new(date(2024, 6, 1), 3.5),
        SeriesPoint::missing(date(2024, 6, 2)),
        SeriesPoint::new(date(2024, 6, 3), 7.25),
    ];

    write_series_csv(&path, &series, &config).unwrap();
    let reloaded = CsvSeriesLoader::new(config).load_path(&path).unwrap();

    assert_eq!(reloaded, vec![series[0], series[2]]);
}
