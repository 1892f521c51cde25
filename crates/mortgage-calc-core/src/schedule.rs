//! Month-by-month amortization schedule for a level-payment loan.
//!
//! Each row depends only on the previous row's balance. Interest, principal
//! and balance are each rounded to cents, so the constant payment drifts
//! away from the exact balance over the term. The principal portion is
//! capped at the outstanding balance and the last row retires whatever is
//! left, which keeps the final balance at exactly zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::repayment::{compute_monthly_payment, periodic_rate, total_payments, CURRENCY_DP};
use crate::types::{with_metadata, Compounding, ComputationOutput, LoanParameters, Money, Percent};
use crate::MortgageResult;

/// One payment in the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based payment number.
    pub month: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Level payment used for every row except possibly the last.
    pub monthly_payment: Money,
    pub rows: Vec<ScheduleRow>,
    pub total_interest: Money,
    pub total_principal: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub loan: LoanParameters,
}

/// Unroll the level-payment formula into `term_years * 12` rows.
pub fn build_schedule(
    principal: Money,
    term_years: u32,
    annual_rate_percent: Percent,
) -> MortgageResult<AmortizationSchedule> {
    let compounding = Compounding::MonthlyEffective;
    let monthly_payment =
        compute_monthly_payment(principal, term_years, annual_rate_percent, compounding)?;
    let rate = periodic_rate(annual_rate_percent, compounding)?;
    let n = total_payments(term_years)?;

    let mut rows = Vec::with_capacity(n as usize);
    let mut balance = principal;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;

    for month in 1..=n {
        let interest_portion = MortgageError::checked(balance.checked_mul(rate), "interest_portion")?
            .round_dp(CURRENCY_DP);
        let mut principal_portion = (monthly_payment - interest_portion).round_dp(CURRENCY_DP);
        if principal_portion > balance || month == n {
            principal_portion = balance;
        }
        if principal_portion < Decimal::ZERO {
            return Err(MortgageError::invalid(
                "annual_rate_percent",
                format!("Payment {monthly_payment} does not cover interest in month {month}"),
            ));
        }

        balance = (balance - principal_portion)
            .round_dp(CURRENCY_DP)
            .max(Decimal::ZERO);
        total_interest = MortgageError::checked(
            total_interest.checked_add(interest_portion),
            "total_interest",
        )?;
        total_principal += principal_portion;
        let payment = MortgageError::checked(
            interest_portion.checked_add(principal_portion),
            "payment",
        )?;

        rows.push(ScheduleRow {
            month,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    Ok(AmortizationSchedule {
        monthly_payment,
        rows,
        total_interest,
        total_principal,
    })
}

/// Build the schedule and wrap it in the standard envelope.
pub fn amortize(input: &ScheduleInput) -> MortgageResult<ComputationOutput<AmortizationSchedule>> {
    let start = Instant::now();
    let loan = &input.loan;

    let schedule = build_schedule(loan.principal, loan.term_years, loan.annual_rate_percent)?;

    let mut warnings = Vec::new();
    if let Some(last) = schedule.rows.last() {
        let drift = last.payment - schedule.monthly_payment;
        if !drift.is_zero() {
            warnings.push(format!(
                "Final payment adjusted by {drift} to absorb cent rounding"
            ));
        }
    }

    Ok(with_metadata(
        "Level-payment amortization schedule (monthly effective, cent rounding per row)",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        schedule,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_first_row_split() {
        let s = build_schedule(dec!(100_000), 20, dec!(3.5)).unwrap();
        assert_eq!(
            s.rows[0],
            ScheduleRow {
                month: 1,
                payment: dec!(579.96),
                principal_portion: dec!(288.29),
                interest_portion: dec!(291.67),
                remaining_balance: dec!(99711.71),
            }
        );
    }

    #[test]
    fn test_final_row_retires_balance() {
        let s = build_schedule(dec!(100_000), 20, dec!(3.5)).unwrap();
        assert_eq!(s.rows.len(), 240);
        assert_eq!(
            s.rows[239],
            ScheduleRow {
                month: 240,
                payment: dec!(579.85),
                principal_portion: dec!(578.16),
                interest_portion: dec!(1.69),
                remaining_balance: Decimal::ZERO,
            }
        );
        assert_eq!(s.total_principal, dec!(100_000));
    }

    #[test]
    fn test_zero_rate_schedule_has_no_interest() {
        let s = build_schedule(dec!(12_000), 1, Decimal::ZERO).unwrap();
        assert_eq!(s.total_interest, Decimal::ZERO);
        assert!(s.rows.iter().all(|r| r.principal_portion == dec!(1000)));
        assert_eq!(s.rows[11].remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_oversized_principal_is_an_error() {
        let err = build_schedule(Decimal::MAX, 1, dec!(20)).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }

    #[test]
    fn test_amortize_reports_final_adjustment() {
        let input = ScheduleInput {
            loan: LoanParameters {
                principal: dec!(100_000),
                term_years: 20,
                annual_rate_percent: dec!(3.5),
            },
        };
        let out = amortize(&input).unwrap();
        assert_eq!(out.warnings.len(), 1);
    }
}
