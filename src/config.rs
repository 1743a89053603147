use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub csv: CsvConfig,
    pub heatmap: HeatmapConfig,
    pub synthetic: SyntheticConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Measurement CSV; `None` means it must come from the CLI
    pub input_csv: Option<PathBuf>,
    pub output_dir: PathBuf,
}

/// Column layout of the measurement CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    pub separator: char,
    pub date_column: String,
    pub value_column: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ';',
            date_column: "End".to_string(),
            value_column: "Steps".to_string(),
        }
    }
}

/// Presentation settings handed to the report formatters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    pub title: String,
    pub value_label: String,
    /// Distance covered per measurement unit (km per step)
    pub distance_per_unit: f64,
    pub distance_unit: String,
    /// Upper bound on colour-scale ticks
    pub scale_ticks: usize,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            title: "Step counts heatmap".to_string(),
            value_label: "Steps".to_string(),
            distance_per_unit: 0.0007,
            distance_unit: "km".to_string(),
            scale_ticks: 6,
        }
    }
}

/// Defaults for generated series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// First generated date (YYYY-MM-DD)
    pub start: String,
    pub days: usize,
    pub max_value: u32,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            start: "2024-02-05".to_string(),
            days: 200,
            max_value: 20000,
        }
    }
}

const DEFAULT_OUTPUT_DIR: &str = "./output_data/plots";

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let csv = CsvConfig::default();
        let heatmap = HeatmapConfig::default();
        let synthetic = SyntheticConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("paths.output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("csv.separator", csv.separator.to_string())?
            .set_default("csv.date_column", csv.date_column)?
            .set_default("csv.value_column", csv.value_column)?
            .set_default("heatmap.title", heatmap.title)?
            .set_default("heatmap.value_label", heatmap.value_label)?
            .set_default("heatmap.distance_per_unit", heatmap.distance_per_unit)?
            .set_default("heatmap.distance_unit", heatmap.distance_unit)?
            .set_default("heatmap.scale_ticks", heatmap.scale_ticks as i64)?
            .set_default("synthetic.start", synthetic.start)?
            .set_default("synthetic.days", synthetic.days as i64)?
            .set_default("synthetic.max_value", synthetic.max_value as i64)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // HEATMAP_CSV__SEPARATOR=, style overrides
            .add_source(
                config::Environment::with_prefix("HEATMAP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(csv_path) = env::var("HEATMAP_INPUT_CSV") {
            app_config.paths.input_csv = Some(PathBuf::from(csv_path));
        }

        if app_config.heatmap.scale_ticks < 2 {
            return Err(ConfigError::Message(
                "heatmap.scale_ticks must be at least 2".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self::builtin()),
        }
    }

    /// Built-in defaults with no file or environment input
    pub fn builtin() -> Self {
        Self {
            paths: PathsConfig {
                input_csv: None,
                output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            },
            csv: CsvConfig::default(),
            heatmap: HeatmapConfig::default(),
            synthetic: SyntheticConfig::default(),
        }
    }
}
