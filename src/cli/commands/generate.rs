use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::{generate_series, write_series_csv};
use chrono::NaiveDate;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct GenerateCommand {
    /// First date of the series, YYYY-MM-DD (overrides config.toml)
    #[arg(long)]
    start: Option<String>,

    /// Number of consecutive days (overrides config.toml)
    #[arg(long)]
    days: Option<usize>,

    /// Exclusive upper bound for generated values (overrides config.toml)
    #[arg(long)]
    max_value: Option<u32>,

    /// RNG seed for a reproducible series
    #[arg(long)]
    seed: Option<u64>,

    /// Destination CSV
    #[arg(long, default_value = "./output_data/synthetic.csv")]
    output: PathBuf,
}

impl GenerateCommand {
    pub fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::get_defaults()?;

        let start_str = self
            .start
            .clone()
            .unwrap_or_else(|| app_config.synthetic.start.clone());
        let start = NaiveDate::parse_from_str(&start_str, "%Y-%m-%d")
            .map_err(|e| AppError::Config(format!("invalid start date {:?}: {}", start_str, e)))?;
        let days = self.days.unwrap_or(app_config.synthetic.days);
        let max_value = self.max_value.unwrap_or(app_config.synthetic.max_value);

        info!("Generating {} days from {} (max {})", days, start, max_value);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let points = generate_series(start, days, max_value, &mut rng)?;
        write_series_csv(&self.output, &points, &app_config.csv)?;

        println!(
            "Synthetic series ({} days) written to: {}",
            points.len(),
            self.output.display()
        );
        Ok(())
    }
}
