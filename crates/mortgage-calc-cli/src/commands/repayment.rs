use clap::Args;
use serde_json::Value;

use mortgage_calc_core::repayment::{self, RepaymentInput};

use super::{compounding_or_default, CompoundingArg, LoanArgs};
use crate::config::Settings;
use crate::input;

/// Arguments for a monthly repayment quote
#[derive(Args)]
pub struct RepaymentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanArgs,

    /// How the annual rate becomes a monthly rate
    #[arg(long, value_enum)]
    pub compounding: Option<CompoundingArg>,
}

pub fn run_repayment(
    args: RepaymentArgs,
    settings: &Settings,
) -> Result<Value, Box<dyn std::error::Error>> {
    let quote_input = match input::read_request(args.input.as_deref())? {
        Some(data) => request_from_json(data, settings)?,
        None => RepaymentInput {
            loan: args.loan.to_loan(settings)?,
            compounding: compounding_or_default(args.compounding, settings),
        },
    };

    settings.limits.check_loan(&quote_input.loan)?;
    let result = repayment::quote_repayment(&quote_input)?;
    Ok(serde_json::to_value(result)?)
}

/// A JSON request without `compounding` uses the configured convention.
fn request_from_json(
    mut data: Value,
    settings: &Settings,
) -> Result<RepaymentInput, Box<dyn std::error::Error>> {
    input::fill_default(&mut data, "compounding", serde_json::to_value(settings.compounding)?);
    Ok(serde_json::from_value(data)?)
}
