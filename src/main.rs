//! conversor-csv: batch converter for web-exported CSV files

use anyhow::{Context, Result};
use clap::Parser;
use conversor_csv::cli::{self, Cli, Commands, ConfigAction};
use conversor_csv::output::formatter::ReportGenerator;
use conversor_csv::{BatchConverter, Config, ConversorError};
use log::{error, info};
use std::path::PathBuf;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let command = cli.command.unwrap_or(Commands::Convert {
        input: None,
        output: None,
        format: None,
        no_color: false,
    });

    // Load configuration; a reset must work even when the file is broken
    let loaded = match command {
        Commands::Config {
            action: Some(ConfigAction::Reset),
        } => Ok(Config::default()),
        _ => Config::load(cli.config.as_deref()),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(command, config, cli.config) {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_file: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Convert {
            input,
            output,
            format,
            no_color,
        } => {
            let format = format
                .as_deref()
                .map(cli::parse_output_format)
                .transpose()
                .map_err(ConversorError::Configuration)?;
            let config = config.with_overrides(input, output, format, no_color);

            let converter = BatchConverter::new(config.conversion.clone());
            let report = converter
                .convert_folder(&config.paths.input_dir, &config.paths.output_dir)
                .context("Batch conversion aborted")?;

            let generator = ReportGenerator::new(config.output.color_output);
            println!("{}", generator.generate_report(&report, config.output.format)?);
        }

        Commands::Config { action } => {
            let config_path = config_file.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    print!("{}", config.to_toml()?);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }

                Some(ConfigAction::Reset) => {
                    Config::default()
                        .save(&config_path)
                        .with_context(|| format!("Failed to write {}", config_path.display()))?;
                    info!("Configuration reset: {}", config_path.display());
                }
            }
        }
    }

    Ok(())
}
