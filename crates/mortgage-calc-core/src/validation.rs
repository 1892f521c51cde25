//! Range checks applied by the input surface before anything is computed.
//!
//! The calculation functions themselves only guard against contract
//! violations (zero-length terms, negative amounts); the business ranges
//! below belong to whoever collects the numbers from a user.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::{LoanParameters, Money, Percent};
use crate::MortgageResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub min_principal: Money,
    pub max_principal: Money,
    pub min_term_years: u32,
    pub max_term_years: u32,
    pub min_rate_percent: Percent,
    pub max_rate_percent: Percent,
    pub min_monthly_repayment: Money,
    pub max_rate_cut_percent: Percent,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_principal: dec!(1000),
            max_principal: dec!(1_000_000_000_000),
            min_term_years: 1,
            max_term_years: 40,
            min_rate_percent: dec!(0.01),
            max_rate_percent: dec!(20.0),
            min_monthly_repayment: dec!(100),
            max_rate_cut_percent: dec!(10.0),
        }
    }
}

impl InputLimits {
    pub fn check_principal(&self, principal: Money) -> MortgageResult<()> {
        if principal < self.min_principal || principal > self.max_principal {
            return Err(MortgageError::invalid(
                "principal",
                format!(
                    "Loan amount must be between {} and {}",
                    self.min_principal, self.max_principal
                ),
            ));
        }
        Ok(())
    }

    pub fn check_term(&self, term_years: u32) -> MortgageResult<()> {
        if term_years < self.min_term_years || term_years > self.max_term_years {
            return Err(MortgageError::invalid(
                "term_years",
                format!(
                    "Term must be between {} and {} years",
                    self.min_term_years, self.max_term_years
                ),
            ));
        }
        Ok(())
    }

    pub fn check_rate(&self, annual_rate_percent: Percent) -> MortgageResult<()> {
        if annual_rate_percent < self.min_rate_percent
            || annual_rate_percent > self.max_rate_percent
        {
            return Err(MortgageError::invalid(
                "annual_rate_percent",
                format!(
                    "Interest rate must be between {}% and {}%",
                    self.min_rate_percent, self.max_rate_percent
                ),
            ));
        }
        Ok(())
    }

    pub fn check_repayment(&self, monthly_repayment: Money) -> MortgageResult<()> {
        if monthly_repayment < self.min_monthly_repayment {
            return Err(MortgageError::invalid(
                "monthly_repayment",
                format!(
                    "Monthly repayment must be at least {}",
                    self.min_monthly_repayment
                ),
            ));
        }
        Ok(())
    }

    pub fn check_rate_cut(&self, rate_cut_percent: Percent) -> MortgageResult<()> {
        if rate_cut_percent < Decimal::ZERO || rate_cut_percent > self.max_rate_cut_percent {
            return Err(MortgageError::invalid(
                "rate_cut_percent",
                format!("Rate cut must be between 0% and {}%", self.max_rate_cut_percent),
            ));
        }
        Ok(())
    }

    /// Principal, term and rate together.
    pub fn check_loan(&self, loan: &LoanParameters) -> MortgageResult<()> {
        self.check_principal(loan.principal)?;
        self.check_term(loan.term_years)?;
        self.check_rate(loan.annual_rate_percent)
    }
}
