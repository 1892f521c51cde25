#![cfg(feature = "schedule")]

use mortgage_calc_core::repayment::compute_monthly_payment;
use mortgage_calc_core::schedule::{self, build_schedule, ScheduleInput};
use mortgage_calc_core::{Compounding, LoanParameters};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_thirty_year_schedule() {
    let s = build_schedule(dec!(250_000), 30, dec!(6.25)).unwrap();
    assert_eq!(s.rows.len(), 360);
    assert_eq!(s.monthly_payment, dec!(1539.29));
    assert_eq!(s.rows[0].interest_portion, dec!(1302.08));
    assert_eq!(s.rows[0].principal_portion, dec!(237.21));
    assert_eq!(s.rows[359].remaining_balance, Decimal::ZERO);
    assert_eq!(s.total_principal, dec!(250_000));
}

#[test]
fn test_months_are_sequential() {
    let s = build_schedule(dec!(10_000), 2, dec!(4)).unwrap();
    let months: Vec<u32> = s.rows.iter().map(|r| r.month).collect();
    assert_eq!(months, (1..=24).collect::<Vec<_>>());
}

#[test]
fn test_amortize_envelope() {
    let out = schedule::amortize(&ScheduleInput {
        loan: LoanParameters {
            principal: dec!(100_000),
            term_years: 20,
            annual_rate_percent: dec!(3.5),
        },
    })
    .unwrap();
    let expected =
        compute_monthly_payment(dec!(100_000), 20, dec!(3.5), Compounding::MonthlyEffective)
            .unwrap();
    assert_eq!(out.result.monthly_payment, expected);
    assert_eq!(
        out.result.total_interest,
        out.result.rows.iter().map(|r| r.interest_portion).sum::<Decimal>()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_schedule_repays_principal(
        principal in 1_000u32..1_000_000,
        term_years in 1u32..=40,
        rate_bp in 1u32..2_000,
    ) {
        let principal = Decimal::from(principal);
        let rate = Decimal::new(i64::from(rate_bp), 2);
        let s = build_schedule(principal, term_years, rate).unwrap();
        let n = term_years * 12;

        prop_assert_eq!(s.rows.len(), n as usize);
        prop_assert_eq!(s.rows.last().map(|r| r.remaining_balance), Some(Decimal::ZERO));

        let repaid: Decimal = s.rows.iter().map(|r| r.principal_portion).sum();
        let tolerance = dec!(0.01) * Decimal::from(n);
        prop_assert!((repaid - principal).abs() <= tolerance);
        prop_assert!(s.rows.iter().all(|r| r.remaining_balance >= Decimal::ZERO));
    }
}
