//! TdF Stats CLI
//!
//! Reads Tour de France results and prints each rider's best gain,
//! the median speed and the median of medians.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use tdf_stats::commands::{
    display_version, execute_report, validate_args, validate_input_file, ReportArgs,
};
use tdf_stats::parser::MalformedPolicy;
use tdf_stats::utils::config::DEFAULT_INPUT_FILE;

/// TdF Stats - speed statistics for Tour de France results
#[derive(Parser, Debug)]
#[command(name = "tdf")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print best gains and median speeds
    Report {
        /// Results file (year,speed,last name,first name per line)
        #[arg(default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// TOML file with a [years] section
        #[arg(short, long, env = "TDF_CONFIG")]
        config: Option<PathBuf>,

        /// First competition year counted by the median speed
        #[arg(long)]
        first_year: Option<i32>,

        /// Last competition year counted by the median speed
        #[arg(long)]
        last_year: Option<i32>,

        /// Output path for a JSON report
        #[arg(long)]
        json: Option<PathBuf>,

        /// Log and skip malformed lines instead of failing
        #[arg(long)]
        skip_malformed: bool,
    },

    /// Check that a results file parses
    Validate {
        /// Results file to check
        #[arg(default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();
    debug!("Default log level: {}", log_level);

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            config,
            first_year,
            last_year,
            json,
            skip_malformed,
        } => {
            let args = ReportArgs {
                input,
                config,
                first_year,
                last_year,
                output_json: json,
                policy: if skip_malformed {
                    MalformedPolicy::Skip
                } else {
                    MalformedPolicy::Fail
                },
                print: true,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Validate { input } => {
            validate_input_file(input)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
