use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use mortgage_calc_core::flavor;
use mortgage_calc_core::savings::{self, RateCutInput};

use super::{compounding_or_default, CompoundingArg, LoanArgs};
use crate::config::Settings;
use crate::input;

/// Arguments for a rate-cut savings projection
#[derive(Args)]
pub struct RateCutArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanArgs,

    /// Percentage points the rate might fall by
    #[arg(long, alias = "cut")]
    pub rate_cut: Option<Decimal>,

    /// How the annual rate becomes a monthly rate
    #[arg(long, value_enum)]
    pub compounding: Option<CompoundingArg>,

    /// Leave out the cheerful message
    #[arg(long)]
    pub no_message: bool,
}

pub fn run_rate_cut(
    args: RateCutArgs,
    settings: &Settings,
) -> Result<Value, Box<dyn std::error::Error>> {
    let cut_input = match input::read_request(args.input.as_deref())? {
        Some(data) => request_from_json(data, settings)?,
        None => RateCutInput {
            loan: args.loan.to_loan(settings)?,
            rate_cut_percent: args
                .rate_cut
                .ok_or("--rate-cut is required (or provide --input)")?,
            compounding: compounding_or_default(args.compounding, settings),
        },
    };

    settings.limits.check_loan(&cut_input.loan)?;
    settings.limits.check_rate_cut(cut_input.rate_cut_percent)?;

    let result = savings::project_rate_cut(&cut_input)?;
    let mut value = serde_json::to_value(result)?;
    if !args.no_message {
        value["message"] = json!(flavor::random_message());
    }
    Ok(value)
}

/// A JSON request without `compounding` uses the configured convention.
fn request_from_json(
    mut data: Value,
    settings: &Settings,
) -> Result<RateCutInput, Box<dyn std::error::Error>> {
    input::fill_default(&mut data, "compounding", serde_json::to_value(settings.compounding)?);
    Ok(serde_json::from_value(data)?)
}
