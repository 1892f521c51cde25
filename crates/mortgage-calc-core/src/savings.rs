//! What a rate cut would save: current vs reduced repayment, and the
//! running total of the monthly saving over the remaining term.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::repayment::{compute_monthly_payment, total_payments, MONTHS_PER_YEAR};
use crate::types::{with_metadata, Compounding, ComputationOutput, LoanParameters, Money, Percent};
use crate::MortgageResult;

/// The reduced rate is never quoted below this floor.
pub const MIN_RATE_PERCENT: Decimal = dec!(0.01);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCutInput {
    pub loan: LoanParameters,
    /// Percentage points taken off the current rate.
    pub rate_cut_percent: Percent,
    #[serde(default)]
    pub compounding: Compounding,
}

/// Cumulative saving after `month` payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPoint {
    pub month: u32,
    pub cumulative_savings: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCutProjection {
    pub current_rate_percent: Percent,
    pub new_rate_percent: Percent,
    pub current_payment: Money,
    pub new_payment: Money,
    pub monthly_savings: Money,
    pub annual_savings: Money,
    pub cumulative_savings: Vec<SavingsPoint>,
}

/// Rate after the cut, floored at [`MIN_RATE_PERCENT`].
pub fn reduced_rate(current_rate_percent: Percent, rate_cut_percent: Percent) -> Percent {
    (current_rate_percent - rate_cut_percent).max(MIN_RATE_PERCENT)
}

/// `monthly_savings * month` for each month; saved amounts do not compound.
pub fn cumulative_savings(monthly_savings: Money, months: u32) -> MortgageResult<Vec<SavingsPoint>> {
    (1..=months)
        .map(|month| {
            let total = monthly_savings.checked_mul(Decimal::from(month));
            Ok(SavingsPoint {
                month,
                cumulative_savings: MortgageError::checked(total, "cumulative_savings")?,
            })
        })
        .collect()
}

/// Compare the current repayment with the repayment after a rate cut.
pub fn project_rate_cut(input: &RateCutInput) -> MortgageResult<ComputationOutput<RateCutProjection>> {
    let start = Instant::now();
    let loan = &input.loan;

    if input.rate_cut_percent < Decimal::ZERO {
        return Err(MortgageError::invalid(
            "rate_cut_percent",
            "Rate cut cannot be negative",
        ));
    }

    let current_payment = compute_monthly_payment(
        loan.principal,
        loan.term_years,
        loan.annual_rate_percent,
        input.compounding,
    )?;
    let new_rate_percent = reduced_rate(loan.annual_rate_percent, input.rate_cut_percent);
    let new_payment = compute_monthly_payment(
        loan.principal,
        loan.term_years,
        new_rate_percent,
        input.compounding,
    )?;

    let monthly_savings = current_payment - new_payment;
    let annual_savings = MortgageError::checked(
        monthly_savings.checked_mul(Decimal::from(MONTHS_PER_YEAR)),
        "annual_savings",
    )?;
    let n = total_payments(loan.term_years)?;

    let mut warnings = Vec::new();
    if loan.annual_rate_percent - input.rate_cut_percent < MIN_RATE_PERCENT {
        warnings.push(format!(
            "Rate cut of {}% floored: new rate held at {}%",
            input.rate_cut_percent, MIN_RATE_PERCENT
        ));
    }
    if monthly_savings < Decimal::ZERO {
        warnings.push("Current rate is below the floor; the 'cut' raises the repayment".into());
    }

    let projection = RateCutProjection {
        current_rate_percent: loan.annual_rate_percent,
        new_rate_percent,
        current_payment,
        new_payment,
        monthly_savings,
        annual_savings,
        cumulative_savings: cumulative_savings(monthly_savings, n)?,
    };

    Ok(with_metadata(
        &format!("Rate-cut savings projection, {}", input.compounding.label()),
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        projection,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn reference_input(cut: Decimal, compounding: Compounding) -> RateCutInput {
        RateCutInput {
            loan: LoanParameters {
                principal: dec!(100_000),
                term_years: 20,
                annual_rate_percent: dec!(3.5),
            },
            rate_cut_percent: cut,
            compounding,
        }
    }

    #[test]
    fn test_one_point_cut_reference() {
        let out = project_rate_cut(&reference_input(dec!(1), Compounding::MonthlyEffective)).unwrap();
        let p = &out.result;
        assert_eq!(p.current_payment, dec!(579.96));
        assert_eq!(p.new_payment, dec!(529.90));
        assert_eq!(p.monthly_savings, dec!(50.06));
        assert_eq!(p.annual_savings, dec!(600.72));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_one_point_cut_daily_convention() {
        let out = project_rate_cut(&reference_input(dec!(1), Compounding::DailyThirtyDay)).unwrap();
        assert_eq!(out.result.current_payment, dec!(577.75));
        assert_eq!(out.result.new_payment, dec!(528.36));
        assert_eq!(out.result.monthly_savings, dec!(49.39));
    }

    #[test]
    fn test_cut_is_floored() {
        let out = project_rate_cut(&reference_input(dec!(10), Compounding::MonthlyEffective)).unwrap();
        assert_eq!(out.result.new_rate_percent, dec!(0.01));
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_cumulative_series_is_linear() {
        let series = cumulative_savings(dec!(50.06), 3).unwrap();
        assert_eq!(
            series,
            vec![
                SavingsPoint { month: 1, cumulative_savings: dec!(50.06) },
                SavingsPoint { month: 2, cumulative_savings: dec!(100.12) },
                SavingsPoint { month: 3, cumulative_savings: dec!(150.18) },
            ]
        );
    }

    #[test]
    fn test_series_covers_term() {
        let out = project_rate_cut(&reference_input(dec!(0.5), Compounding::MonthlyEffective)).unwrap();
        let series = &out.result.cumulative_savings;
        assert_eq!(series.len(), 240);
        assert_eq!(
            series[239].cumulative_savings,
            out.result.monthly_savings * dec!(240)
        );
    }

    #[test]
    fn test_cumulative_overflow_is_an_error() {
        let err = cumulative_savings(Decimal::MAX / dec!(2), 3).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }

    #[test]
    fn test_negative_cut_is_rejected() {
        let err = project_rate_cut(&reference_input(dec!(-1), Compounding::MonthlyEffective))
            .unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }
}
