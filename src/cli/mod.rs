use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Calendar heatmap builder for daily measurement series
#[derive(Parser)]
#[command(name = "step-heatmap")]
#[command(about = "Shape a daily time series into per-month calendar heatmaps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build month heatmaps for one year of a daily series
    Render(commands::render::RenderCommand),
    /// Write a synthetic daily series as CSV
    Generate(commands::generate::GenerateCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(command) => command.run(),
        Commands::Generate(command) => command.run(),
    }
}
