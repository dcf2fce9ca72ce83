//! CLI interface for the CSV converter

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conversor-csv")]
#[command(about = "Convert web-exported CSV files into the downstream registration format")]
#[command(long_about = "Reads every .csv file in the input folder, uppercases names, rewrites birth dates as YYYY-MM-DD and punctuates CPF numbers, writing same-named files to the output folder")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every CSV file in the input folder (default command)
    Convert {
        /// Input folder (defaults to ./entradas/)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output folder, created if missing (defaults to ./saidas/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format: console, json
        #[arg(short, long)]
        format: Option<String>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the default configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate report format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
