//! Implied interest rate from a known monthly repayment.
//!
//! Inverts the monthly-effective level-payment formula by bisection. The
//! payment is strictly increasing in the rate for a fixed principal and
//! term, so a payment above the target means the rate is too high.
//!
//! Failure policy: a repayment below the interest-free minimum
//! (`principal / n`) is rejected up front as [`RateEstimate::Infeasible`].
//! A feasible search that exhausts its iteration budget returns the last
//! midpoint with `converged = false` rather than an error.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::error::MortgageError;
use crate::repayment::{payment_for_periodic_rate, periodic_rate, total_payments, CURRENCY_DP};
use crate::types::{with_metadata, Compounding, ComputationOutput, Money, Percent};
use crate::MortgageResult;

const DEFAULT_LOWER_BOUND: Decimal = dec!(0.1);
const DEFAULT_UPPER_BOUND: Decimal = dec!(12.0);
const DEFAULT_TOLERANCE: Decimal = dec!(0.001);
const DEFAULT_MAX_ITERATIONS: u32 = 500;

/// Rates are reported to two decimal places of a percent.
const RATE_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Bisection search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Lowest annual rate searched, in percent.
    pub lower_bound_percent: Percent,
    /// Highest annual rate searched, in percent.
    pub upper_bound_percent: Percent,
    /// Accepted absolute gap between estimated and target repayment.
    pub tolerance: Money,
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            lower_bound_percent: DEFAULT_LOWER_BOUND,
            upper_bound_percent: DEFAULT_UPPER_BOUND,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> MortgageResult<()> {
        if self.lower_bound_percent < Decimal::ZERO {
            return Err(MortgageError::invalid(
                "lower_bound_percent",
                "Search bound cannot be negative",
            ));
        }
        if self.lower_bound_percent >= self.upper_bound_percent {
            return Err(MortgageError::invalid(
                "upper_bound_percent",
                "Upper search bound must exceed the lower bound",
            ));
        }
        if self.tolerance <= Decimal::ZERO {
            return Err(MortgageError::invalid("tolerance", "Tolerance must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(MortgageError::invalid(
                "max_iterations",
                "At least one iteration is required",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSolveInput {
    pub principal: Money,
    pub term_years: u32,
    /// Known monthly repayment.
    pub monthly_repayment: Money,
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Outcome of the rate search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RateEstimate {
    Solved {
        /// Annual nominal rate in percent, rounded to 2 dp.
        annual_rate_percent: Percent,
        iterations: u32,
        /// False when the iteration budget ran out; the rate is then a
        /// best-effort approximation.
        converged: bool,
        /// Estimated minus target repayment at the returned midpoint.
        residual: Money,
    },
    /// The repayment cannot retire the principal within the term even at 0%.
    Infeasible { minimum_repayment: Money },
}

impl RateEstimate {
    pub fn annual_rate_percent(&self) -> Option<Percent> {
        match self {
            RateEstimate::Solved {
                annual_rate_percent,
                ..
            } => Some(*annual_rate_percent),
            RateEstimate::Infeasible { .. } => None,
        }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, RateEstimate::Infeasible { .. })
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Annual rate (monthly-effective) that produces `monthly_repayment`,
/// searched over 0.1%–12.0%.
pub fn solve_annual_rate(
    principal: Money,
    term_years: u32,
    monthly_repayment: Money,
) -> MortgageResult<RateEstimate> {
    solve_annual_rate_with(principal, term_years, monthly_repayment, &SolverConfig::default())
}

/// [`solve_annual_rate`] with explicit search settings.
pub fn solve_annual_rate_with(
    principal: Money,
    term_years: u32,
    monthly_repayment: Money,
    config: &SolverConfig,
) -> MortgageResult<RateEstimate> {
    if principal <= Decimal::ZERO {
        return Err(MortgageError::invalid("principal", "Principal must be positive"));
    }
    config.validate()?;
    let n = total_payments(term_years)?;

    let minimum = principal / Decimal::from(n);
    if monthly_repayment < minimum {
        debug!(%monthly_repayment, %minimum, "repayment below interest-free minimum");
        return Ok(RateEstimate::Infeasible {
            minimum_repayment: minimum
                .round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToPositiveInfinity),
        });
    }

    let mut low = config.lower_bound_percent;
    let mut high = config.upper_bound_percent;
    let mut mid = low;
    let mut residual = Decimal::ZERO;

    for i in 0..config.max_iterations {
        mid = (low + high) / dec!(2);
        let rate = periodic_rate(mid, Compounding::MonthlyEffective)?;
        let estimated = payment_for_periodic_rate(principal, n, rate)?;
        residual = estimated - monthly_repayment;

        if residual.abs() < config.tolerance {
            debug!(iterations = i + 1, rate = %mid, "rate search converged");
            return Ok(RateEstimate::Solved {
                annual_rate_percent: mid.round_dp(RATE_DP),
                iterations: i + 1,
                converged: true,
                residual,
            });
        }

        if estimated > monthly_repayment {
            high = mid;
        } else {
            low = mid;
        }
    }

    warn!(
        iterations = config.max_iterations,
        rate = %mid,
        %residual,
        "rate search exhausted its iteration budget"
    );
    Ok(RateEstimate::Solved {
        annual_rate_percent: mid.round_dp(RATE_DP),
        iterations: config.max_iterations,
        converged: false,
        residual,
    })
}

/// Estimate the rate and wrap it in the standard envelope.
pub fn estimate_rate(input: &RateSolveInput) -> MortgageResult<ComputationOutput<RateEstimate>> {
    let start = Instant::now();

    let estimate = solve_annual_rate_with(
        input.principal,
        input.term_years,
        input.monthly_repayment,
        &input.solver,
    )?;

    let mut warnings = Vec::new();
    match &estimate {
        RateEstimate::Infeasible { minimum_repayment } => warnings.push(format!(
            "Repayment {} cannot repay the loan within {} years even at 0%; at least {} is needed",
            input.monthly_repayment, input.term_years, minimum_repayment
        )),
        RateEstimate::Solved {
            converged: false,
            iterations,
            ..
        } => warnings.push(format!(
            "Search did not converge within {} iterations; the rate is approximate and may sit \
             at the {}%–{}% search bound",
            iterations, input.solver.lower_bound_percent, input.solver.upper_bound_percent
        )),
        RateEstimate::Solved { .. } => {}
    }

    Ok(with_metadata(
        "Bisection on the monthly-effective level-payment formula",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        estimate,
    ))
}
