//! Payment estimator: the fixed monthly repayment of a level-payment loan.
//!
//! Two compounding conventions are supported and deliberately kept apart,
//! since they give different numbers for the same quoted rate:
//!
//! - monthly effective: `r = annual / 12`
//! - daily compounded over a 30-day month: `r = (1 + annual / 365)^30 - 1`
//!
//! Payments are `P * r / (1 - (1 + r)^-n)`, or `P / n` when `r = 0`, and are
//! rounded to cents with banker's rounding (`Decimal::round_dp`).

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::types::{
    with_metadata, Compounding, ComputationOutput, LoanParameters, Money, Percent, Rate,
};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MONTHS_PER_YEAR: u32 = 12;

const DAYS_PER_YEAR: Decimal = dec!(365);

/// Length of the approximated month under daily compounding.
const DAYS_PER_MONTH: i64 = 30;

const PERCENT: Decimal = dec!(100);

/// Currency rounding: cents.
pub const CURRENCY_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Repayment quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentInput {
    pub loan: LoanParameters,
    #[serde(default)]
    pub compounding: Compounding,
}

/// Fixed monthly repayment for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentQuote {
    /// Monthly repayment, rounded to cents.
    pub monthly_payment: Money,
    pub compounding: Compounding,
    /// Unrounded monthly period rate used in the annuity formula.
    pub periodic_rate: Rate,
    pub total_payments: u32,
    /// `monthly_payment * total_payments`.
    pub total_repaid: Money,
    /// `total_repaid - principal`.
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert an annual nominal percentage into the monthly period rate.
pub fn periodic_rate(annual_rate_percent: Percent, compounding: Compounding) -> MortgageResult<Rate> {
    if annual_rate_percent < Decimal::ZERO {
        return Err(MortgageError::invalid(
            "annual_rate_percent",
            "Interest rate cannot be negative",
        ));
    }

    let annual = annual_rate_percent / PERCENT;
    match compounding {
        Compounding::MonthlyEffective => Ok(annual / Decimal::from(MONTHS_PER_YEAR)),
        Compounding::DailyThirtyDay => {
            let daily = annual / DAYS_PER_YEAR;
            let growth = (Decimal::ONE + daily)
                .checked_powi(DAYS_PER_MONTH)
                .ok_or_else(|| {
                    MortgageError::invalid("annual_rate_percent", "Daily compounding overflowed")
                })?;
            Ok(growth - Decimal::ONE)
        }
    }
}

/// Number of monthly payments in a term.
///
/// A zero-year term has no payments to spread the principal over; that is a
/// caller contract violation and is reported rather than producing a NaN.
pub fn total_payments(term_years: u32) -> MortgageResult<u32> {
    term_years
        .checked_mul(MONTHS_PER_YEAR)
        .filter(|n| *n > 0)
        .ok_or_else(|| MortgageError::DivisionByZero {
            context: format!("payment count for a {term_years}-year term"),
        })
}

/// Unrounded level payment for `periods` payments at period rate `rate`.
pub fn payment_for_periodic_rate(principal: Money, periods: u32, rate: Rate) -> MortgageResult<Money> {
    if periods == 0 {
        return Err(MortgageError::DivisionByZero {
            context: "level payment with zero periods".into(),
        });
    }

    let n = Decimal::from(periods);
    if rate.is_zero() {
        return Ok(principal / n);
    }

    let growth = (Decimal::ONE + rate)
        .checked_powi(i64::from(periods))
        .ok_or_else(|| MortgageError::invalid("rate", "Compound growth factor overflowed"))?;
    let denominator = Decimal::ONE - Decimal::ONE / growth;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    let interest = MortgageError::checked(principal.checked_mul(rate), "principal")?;
    MortgageError::checked(interest.checked_div(denominator), "monthly_payment")
}

/// Fixed monthly repayment, rounded to cents.
pub fn compute_monthly_payment(
    principal: Money,
    term_years: u32,
    annual_rate_percent: Percent,
    compounding: Compounding,
) -> MortgageResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(MortgageError::invalid("principal", "Principal must be positive"));
    }
    let n = total_payments(term_years)?;
    let r = periodic_rate(annual_rate_percent, compounding)?;
    let payment = payment_for_periodic_rate(principal, n, r)?;
    Ok(payment.round_dp(CURRENCY_DP))
}

/// Quote the monthly repayment with totals, wrapped in the standard envelope.
pub fn quote_repayment(input: &RepaymentInput) -> MortgageResult<ComputationOutput<RepaymentQuote>> {
    let start = Instant::now();
    let loan = &input.loan;

    let monthly_payment = compute_monthly_payment(
        loan.principal,
        loan.term_years,
        loan.annual_rate_percent,
        input.compounding,
    )?;
    let periodic_rate = periodic_rate(loan.annual_rate_percent, input.compounding)?;
    let total_payments = loan.total_payments();
    let total_repaid = MortgageError::checked(
        monthly_payment.checked_mul(Decimal::from(total_payments)),
        "total_repaid",
    )?;

    let mut warnings = Vec::new();
    if periodic_rate.is_zero() {
        warnings.push("Zero interest rate: repayment is straight-line principal only".into());
    }
    if input.compounding == Compounding::DailyThirtyDay {
        warnings.push(
            "Daily compounding is approximated with 30-day months, not calendar accrual".into(),
        );
    }

    let quote = RepaymentQuote {
        monthly_payment,
        compounding: input.compounding,
        periodic_rate,
        total_payments,
        total_repaid,
        total_interest: MortgageError::checked(
            total_repaid.checked_sub(loan.principal),
            "total_interest",
        )?,
    };

    Ok(with_metadata(
        &format!("Level-payment amortization, {}", input.compounding.label()),
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        quote,
    ))
}
