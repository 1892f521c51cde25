use mortgage_calc_core::repayment::{self, compute_monthly_payment, RepaymentInput};
use mortgage_calc_core::savings::{self, RateCutInput};
use mortgage_calc_core::{Compounding, LoanParameters, MortgageError};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn pct(basis_points: u32) -> Decimal {
    Decimal::new(i64::from(basis_points), 2)
}

fn reference_loan(rate: Decimal) -> LoanParameters {
    LoanParameters {
        principal: dec!(100_000),
        term_years: 20,
        annual_rate_percent: rate,
    }
}

// ===========================================================================
// Reference scenario: 100k over 20 years, 3.5% cut to 2.5%
// ===========================================================================

#[test]
fn test_rate_cut_scenario_matches_recomputed_payments() {
    let current =
        compute_monthly_payment(dec!(100_000), 20, dec!(3.5), Compounding::MonthlyEffective)
            .unwrap();
    let reduced =
        compute_monthly_payment(dec!(100_000), 20, dec!(2.5), Compounding::MonthlyEffective)
            .unwrap();

    let out = savings::project_rate_cut(&RateCutInput {
        loan: reference_loan(dec!(3.5)),
        rate_cut_percent: dec!(1.0),
        compounding: Compounding::MonthlyEffective,
    })
    .unwrap();

    let p = &out.result;
    assert_eq!(p.current_payment, current);
    assert_eq!(p.new_payment, reduced);
    assert_eq!(p.monthly_savings, current - reduced);
    assert_eq!(p.annual_savings, (current - reduced) * dec!(12));

    // 579.96 - 529.90
    assert_eq!(p.monthly_savings, dec!(50.06));
}

#[test]
fn test_conventions_differ_for_same_rate() {
    let loan = reference_loan(dec!(3.5));
    let monthly = repayment::quote_repayment(&RepaymentInput {
        loan: loan.clone(),
        compounding: Compounding::MonthlyEffective,
    })
    .unwrap();
    let daily = repayment::quote_repayment(&RepaymentInput {
        loan,
        compounding: Compounding::DailyThirtyDay,
    })
    .unwrap();

    assert_ne!(monthly.result.monthly_payment, daily.result.monthly_payment);
    assert_eq!(daily.result.monthly_payment, dec!(577.75));
}

#[test]
fn test_compounding_defaults_to_monthly_effective() {
    let input: RepaymentInput = serde_json::from_str(
        r#"{"loan": {"principal": "100000", "term_years": 20, "annual_rate_percent": "3.5"}}"#,
    )
    .unwrap();
    assert_eq!(input.compounding, Compounding::MonthlyEffective);

    let input: RepaymentInput = serde_json::from_str(
        r#"{"loan": {"principal": "100000", "term_years": 20, "annual_rate_percent": "3.5"},
            "compounding": "daily_thirty_day"}"#,
    )
    .unwrap();
    assert_eq!(input.compounding, Compounding::DailyThirtyDay);
}

#[test]
fn test_non_positive_principal_is_rejected() {
    let err = compute_monthly_payment(Decimal::ZERO, 20, dec!(3), Compounding::MonthlyEffective)
        .unwrap_err();
    assert!(matches!(err, MortgageError::InvalidInput { .. }));
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_payment_is_non_negative_and_monotone_in_rate(
        principal in 1_000u32..5_000_000,
        term_years in 1u32..=40,
        rate_bp in 0u32..2_000,
        step_bp in 1u32..200,
    ) {
        let principal = Decimal::from(principal);
        let low = compute_monthly_payment(
            principal, term_years, pct(rate_bp), Compounding::MonthlyEffective,
        ).unwrap();
        let high = compute_monthly_payment(
            principal, term_years, pct(rate_bp + step_bp), Compounding::MonthlyEffective,
        ).unwrap();

        prop_assert!(low >= Decimal::ZERO);
        prop_assert!(low <= high, "payment fell from {} to {}", low, high);
    }

    #[test]
    fn prop_zero_rate_is_principal_over_payments(
        principal in 1_000u32..5_000_000,
        term_years in 1u32..=40,
    ) {
        let principal = Decimal::from(principal);
        let payment = compute_monthly_payment(
            principal, term_years, Decimal::ZERO, Compounding::MonthlyEffective,
        ).unwrap();
        let expected = (principal / Decimal::from(term_years * 12)).round_dp(2);
        prop_assert_eq!(payment, expected);
    }

    #[test]
    fn prop_daily_convention_is_finite_and_non_negative(
        principal in 1_000u32..5_000_000,
        term_years in 1u32..=40,
        rate_bp in 1u32..2_000,
    ) {
        let payment = compute_monthly_payment(
            Decimal::from(principal), term_years, pct(rate_bp), Compounding::DailyThirtyDay,
        ).unwrap();
        prop_assert!(payment > Decimal::ZERO);
    }
}
