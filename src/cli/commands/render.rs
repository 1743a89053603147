use super::write_output_to_file;
use crate::analysis::{HeatmapEngine, OutputFormat, ReportFormatter};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::{generate_series, CsvSeriesLoader};
use crate::types::{Highlight, SeriesPoint};
use chrono::NaiveDate;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct RenderCommand {
    /// Path to measurement CSV (overrides config.toml and HEATMAP_INPUT_CSV)
    #[arg(long)]
    csv_path: Option<PathBuf>,

    /// Use a generated series instead of a CSV file
    #[arg(long, conflicts_with = "csv_path")]
    synthetic: bool,

    /// Seed for --synthetic (random if omitted)
    #[arg(long, requires = "synthetic")]
    seed: Option<u64>,

    /// Year to plot (default: first year present in the data)
    #[arg(long)]
    year: Option<i32>,

    /// Highlight a date, as DATE=LABEL (repeatable)
    #[arg(long = "highlight")]
    highlights: Vec<Highlight>,

    /// Also highlight the first and last day of data
    #[arg(long)]
    mark_range: bool,

    /// CSV field separator (overrides config.toml)
    #[arg(long)]
    separator: Option<char>,

    /// Date column name (overrides config.toml)
    #[arg(long)]
    date_column: Option<String>,

    /// Value column name (overrides config.toml)
    #[arg(long)]
    value_column: Option<String>,

    /// Output format (console, json or plotly)
    #[arg(long, default_value = "console")]
    format: String,

    /// Output file (json/plotly default to the configured output directory)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Calendar heatmap ===");

        let mut app_config = AppConfig::get_defaults()?;
        if let Some(separator) = self.separator {
            app_config.csv.separator = separator;
        }
        if let Some(column) = &self.date_column {
            app_config.csv.date_column = column.clone();
        }
        if let Some(column) = &self.value_column {
            app_config.csv.value_column = column.clone();
        }

        let points = self.load_points(&app_config)?;
        let highlights = self.collect_highlights(&points);

        let engine = HeatmapEngine::new(app_config.heatmap.clone());
        let report = engine.build_from_points(&points, self.year, &highlights)?;

        let format = OutputFormat::parse(&self.format);
        let formatted = ReportFormatter::format_calendar(&report, engine.settings(), &format)?;

        if let Some(path) = &self.output {
            write_output_to_file(path, &formatted, "Heatmap")?;
        } else if format.is_file_output() {
            let filename = match format {
                OutputFormat::Plotly => format!("heatmap_{}_plotly.json", report.year),
                _ => format!("heatmap_{}.json", report.year),
            };
            let default_path = app_config.paths.output_dir.join(filename);
            write_output_to_file(&default_path, &formatted, "Heatmap")?;
        } else {
            print!("{}", formatted);
        }

        Ok(())
    }

    fn load_points(&self, app_config: &AppConfig) -> AppResult<Vec<SeriesPoint>> {
        if self.synthetic {
            let synthetic = &app_config.synthetic;
            let start = NaiveDate::parse_from_str(&synthetic.start, "%Y-%m-%d").map_err(|e| {
                AppError::Config(format!("synthetic.start {:?}: {}", synthetic.start, e))
            })?;
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            info!(
                "Generating {} synthetic days from {}",
                synthetic.days, start
            );
            return generate_series(start, synthetic.days, synthetic.max_value, &mut rng);
        }

        let csv_path = self
            .csv_path
            .clone()
            .or_else(|| app_config.paths.input_csv.clone())
            .ok_or_else(|| {
                AppError::Config(
                    "No input CSV provided. Use --csv-path, --synthetic, set HEATMAP_INPUT_CSV or configure paths.input_csv in config.toml".to_string(),
                )
            })?;

        if !csv_path.exists() {
            return Err(AppError::Config(format!(
                "CSV file does not exist: {}",
                csv_path.display()
            )));
        }

        CsvSeriesLoader::new(app_config.csv.clone()).load_path(&csv_path)
    }

    /// Requested highlights in legend order: first day of data, user dates,
    /// last day of data
    fn collect_highlights(&self, points: &[SeriesPoint]) -> Vec<Highlight> {
        let range = if self.mark_range {
            let first = points.iter().map(|p| p.date).min();
            let last = points.iter().map(|p| p.date).max();
            if first.is_none() {
                warn!("--mark-range ignored: series is empty");
            }
            first.zip(last)
        } else {
            None
        };

        let mut highlights = Vec::with_capacity(self.highlights.len() + 2);
        if let Some((first, _)) = range {
            highlights.push(Highlight::new(first, "First day of data"));
        }
        highlights.extend(self.highlights.iter().cloned());
        if let Some((_, last)) = range {
            highlights.push(Highlight::new(last, "Last day of data"));
        }
        highlights
    }
}
