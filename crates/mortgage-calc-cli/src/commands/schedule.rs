use clap::Args;
use serde_json::Value;

use mortgage_calc_core::schedule::{self, ScheduleInput};

use super::LoanArgs;
use crate::config::Settings;
use crate::input;

/// Arguments for a full amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_schedule(
    args: ScheduleArgs,
    settings: &Settings,
) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = match input::read_request(args.input.as_deref())? {
        Some(data) => serde_json::from_value(data)?,
        None => ScheduleInput {
            loan: args.loan.to_loan(settings)?,
        },
    };

    settings.limits.check_loan(&schedule_input.loan)?;
    let result = schedule::amortize(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
