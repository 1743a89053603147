use super::aggregate_daily;
use crate::config::CsvConfig;
use crate::errors::{AppError, AppResult};
use crate::types::SeriesPoint;
use crate::utils::time::{parse_calendar_date, to_iso};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// CSV loader for daily measurement series
///
/// Reads the configured date and value columns, keeps the calendar date of
/// each timestamp and sums values per date.
pub struct CsvSeriesLoader {
    config: CsvConfig,
}

impl CsvSeriesLoader {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Load and aggregate the series in `path`
    pub fn load_path(&self, path: &Path) -> AppResult<Vec<SeriesPoint>> {
        info!("Loading series from {}", path.display());
        let file = File::open(path).map_err(AppError::Io)?;
        let points = self.load_reader(BufReader::new(file))?;
        info!("Loaded {} daily points", points.len());
        Ok(points)
    }

    /// Load and aggregate a series from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> AppResult<Vec<SeriesPoint>> {
        let delimiter = self.delimiter()?;
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .comment(Some(b'#')) // Skip lines starting with #
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let date_idx = column_index(&headers, &self.config.date_column)?;
        let value_idx = column_index(&headers, &self.config.value_column)?;

        let mut raw = Vec::new();
        for (row_num, result) in csv_reader.records().enumerate() {
            let record = result.map_err(AppError::Csv)?;
            // Header is line 1
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_num + 2);
            raw.push(self.parse_record(&record, date_idx, value_idx, line)?);
        }

        debug!(rows = raw.len(), "parsed CSV rows");
        Ok(aggregate_daily(raw))
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        date_idx: usize,
        value_idx: usize,
        line: usize,
    ) -> AppResult<SeriesPoint> {
        let date_str = record.get(date_idx).unwrap_or_default();
        let date = parse_calendar_date(date_str).ok_or_else(|| AppError::DateParse {
            line,
            value: date_str.to_string(),
        })?;

        let value_str = record.get(value_idx).unwrap_or_default();
        let value: f64 = value_str.parse().map_err(|_| {
            AppError::InvalidData(format!(
                "line {}: {} is not numeric: {:?}",
                line, self.config.value_column, value_str
            ))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::InvalidData(format!(
                "line {}: {} must be a non-negative number, got {}",
                line, self.config.value_column, value
            )));
        }

        Ok(SeriesPoint::new(date, value))
    }

    fn delimiter(&self) -> AppResult<u8> {
        u8::try_from(self.config.separator)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "CSV separator must be a single ASCII character, got {:?}",
                    self.config.separator
                ))
            })
    }
}

fn column_index(headers: &StringRecord, name: &str) -> AppResult<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        AppError::InvalidData(format!(
            "column {:?} not found in CSV header ({})",
            name,
            headers.iter().collect::<Vec<_>>().join(", ")
        ))
    })
}

/// Write `points` as a CSV in the configured layout (missing days skipped)
pub fn write_series_csv(path: &Path, points: &[SeriesPoint], config: &CsvConfig) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let delimiter = CsvSeriesLoader::new(config.clone()).delimiter()?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;

    writer.write_record([config.date_column.as_str(), config.value_column.as_str()])?;
    let mut written = 0usize;
    for point in points {
        if let Some(value) = point.value {
            writer.write_record([to_iso(point.date), value.to_string()])?;
            written += 1;
        }
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", written, path.display());
    Ok(())
}
