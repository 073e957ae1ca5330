//! Repayment CLI - Command Line Front End for the Repayment Calculator
//!
//! # Commands
//!
//! - `repayment compute --amount <A> --rate <R> --years <Y>` - Compute one repayment
//! - `repayment interactive` - Fill in and recalculate a repayment form on stdin
//! - `repayment frequencies` - List supported repayment frequencies
//!
//! # Architecture
//!
//! This binary is the caller of `repayment_core`: it collects raw field
//! values, hands them to the calculator and renders the result or the
//! user-facing error message.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs, CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Loan repayment calculator
#[derive(Parser)]
#[command(name = "repayment")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./repayment.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the periodic repayment for a loan
    Compute {
        /// Loan amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Annual interest rate in percent (e.g. 4.5)
        #[arg(short, long, allow_hyphen_values = true)]
        rate: String,

        /// Loan term in years
        #[arg(short, long, allow_hyphen_values = true)]
        years: String,

        /// Repayment frequency (weekly, fortnightly, monthly)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Output format (table, json, plain)
        #[arg(long)]
        format: Option<String>,
    },

    /// Run an interactive repayment form on stdin
    Interactive,

    /// List supported repayment frequencies
    Frequencies,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

/// Resolve configuration before any subscriber exists.
///
/// Failures here are reported on stderr only; tracing is installed from
/// the resolved log level afterwards.
fn load_config(cli: &Cli) -> Result<CliConfig> {
    let format_override = match &cli.command {
        Commands::Compute {
            format: Some(format),
            ..
        } => Some(format.parse::<OutputFormat>()?),
        _ => None,
    };

    let config = build_config(
        &CliArgs {
            config_file: cli.config.clone(),
            verbose: cli.verbose,
            format: format_override,
        },
        |key| std::env::var(key).ok(),
    )?;
    Ok(config)
}

fn execute(command: Commands, config: &CliConfig) -> Result<()> {
    match command {
        Commands::Compute {
            amount,
            rate,
            years,
            frequency,
            ..
        } => commands::compute::run(&amount, &rate, &years, &frequency, config.format),
        Commands::Interactive => commands::interactive::run(),
        Commands::Frequencies => commands::frequencies::run(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );

    match execute(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
