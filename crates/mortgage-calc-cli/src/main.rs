mod commands;
mod config;
mod input;
mod output;
mod rate_lookup;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::rate_solver::SolveRateArgs;
use commands::repayment::RepaymentArgs;
use commands::savings::RateCutArgs;
use commands::schedule::ScheduleArgs;

/// Count your chickens before they hatch: mortgage repayments and rate-cut savings
#[derive(Parser)]
#[command(
    name = "mortcalc",
    version,
    about = "Mortgage repayments and rate-cut savings",
    long_about = "Estimate fixed monthly mortgage repayments, back out the interest rate \
                  behind a known repayment, print amortization schedules, and project what \
                  a rate cut would save. Illustrative only; not financial advice."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Settings file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed monthly repayment for a loan
    Repayment(RepaymentArgs),
    /// Estimate the annual rate behind a known monthly repayment
    SolveRate(SolveRateArgs),
    /// Month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Savings from a potential interest-rate cut
    RateCut(RateCutArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("mortcalc=debug,mortgage_calc_core=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("mortcalc=warn,mortgage_calc_core=warn"))
    };

    // stdout carries the result; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match config::Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}: {}", "config error".red().bold(), e);
            process::exit(1);
        }
    };
    tracing::debug!(?settings, "settings loaded");

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Repayment(args) => commands::repayment::run_repayment(args, &settings),
        Commands::SolveRate(args) => commands::rate_solver::run_solve_rate(args, &settings),
        Commands::Schedule(args) => commands::schedule::run_schedule(args, &settings),
        Commands::RateCut(args) => commands::savings::run_rate_cut(args, &settings),
        Commands::Version => {
            println!("mortcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
