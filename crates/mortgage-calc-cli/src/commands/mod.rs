pub mod rate_solver;
pub mod repayment;
pub mod savings;
pub mod schedule;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use mortgage_calc_core::{Compounding, LoanParameters};

use crate::config::Settings;
use crate::rate_lookup;

/// Loan flags shared by every command that quotes a payment
#[derive(Args)]
pub struct LoanArgs {
    /// Loan amount outstanding
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Years remaining on the loan
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Current annual interest rate in percent (looked up, or 6.0, if omitted)
    #[arg(long, alias = "rate-percent")]
    pub rate: Option<Decimal>,
}

impl LoanArgs {
    /// Build loan parameters from flags, resolving a missing rate through
    /// the configured rate source.
    pub fn to_loan(&self, settings: &Settings) -> Result<LoanParameters, Box<dyn std::error::Error>> {
        let principal = self
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let term_years = self
            .term_years
            .ok_or("--term-years is required (or provide --input)")?;
        let annual_rate_percent = match self.rate {
            Some(rate) => rate,
            None => rate_lookup::resolve_default_rate(&settings.rate_source),
        };
        Ok(LoanParameters {
            principal,
            term_years,
            annual_rate_percent,
        })
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompoundingArg {
    /// annual / 12
    MonthlyEffective,
    /// annual / 365 compounded over 30 days
    DailyThirtyDay,
}

impl From<CompoundingArg> for Compounding {
    fn from(arg: CompoundingArg) -> Self {
        match arg {
            CompoundingArg::MonthlyEffective => Compounding::MonthlyEffective,
            CompoundingArg::DailyThirtyDay => Compounding::DailyThirtyDay,
        }
    }
}

/// Flag value if given, otherwise the configured convention.
pub fn compounding_or_default(arg: Option<CompoundingArg>, settings: &Settings) -> Compounding {
    arg.map(Compounding::from).unwrap_or(settings.compounding)
}
