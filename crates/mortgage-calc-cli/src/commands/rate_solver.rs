use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::rate_solver::{self, RateSolveInput};

use crate::config::Settings;
use crate::input;

/// Arguments for estimating the rate behind a known repayment
#[derive(Args)]
pub struct SolveRateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount outstanding
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Years remaining on the loan
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Current monthly repayment
    #[arg(long, alias = "repayment")]
    pub monthly_repayment: Option<Decimal>,

    /// Override the iteration budget
    #[arg(long)]
    pub max_iterations: Option<u32>,
}

pub fn run_solve_rate(
    args: SolveRateArgs,
    settings: &Settings,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut solve_input = match input::read_request(args.input.as_deref())? {
        Some(data) => request_from_json(data, settings)?,
        None => RateSolveInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            term_years: args
                .term_years
                .ok_or("--term-years is required (or provide --input)")?,
            monthly_repayment: args
                .monthly_repayment
                .ok_or("--monthly-repayment is required (or provide --input)")?,
            solver: settings.solver.clone(),
        },
    };
    if let Some(max_iterations) = args.max_iterations {
        solve_input.solver.max_iterations = max_iterations;
    }

    let limits = &settings.limits;
    limits.check_principal(solve_input.principal)?;
    limits.check_term(solve_input.term_years)?;
    limits.check_repayment(solve_input.monthly_repayment)?;

    let result = rate_solver::estimate_rate(&solve_input)?;
    Ok(serde_json::to_value(result)?)
}

/// A JSON request takes any solver settings it leaves out from the
/// configuration.
fn request_from_json(
    mut data: Value,
    settings: &Settings,
) -> Result<RateSolveInput, Box<dyn std::error::Error>> {
    input::fill_default(&mut data, "solver", serde_json::to_value(&settings.solver)?);
    Ok(serde_json::from_value(data)?)
}
