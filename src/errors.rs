use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV processing
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Unparsable or out-of-range date at ingestion
    #[error("Invalid date at line {line}: {value}")]
    DateParse { line: usize, value: String },

    /// Series has no points, so no year range can be derived
    #[error("Input series is empty")]
    EmptyInput,

    /// Requested year has no entries in the completed series
    #[error("No data for year {0}")]
    NoDataForYear(i32),

    /// Highlight request not in DATE=LABEL form
    #[error("Invalid highlight: {0}")]
    InvalidHighlight(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
