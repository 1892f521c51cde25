//! Where a default interest rate comes from when the user has not typed
//! one. A lookup is any function returning a rate; whatever goes wrong with
//! it, callers get a usable rate back.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::error::MortgageError;
use crate::types::Percent;
use crate::MortgageResult;

/// Rate used whenever a lookup fails.
pub const DEFAULT_ANNUAL_RATE_PERCENT: Decimal = dec!(6.0);

/// A single blocking lookup of the prevailing annual rate, in percent.
pub trait RateSource {
    fn current_annual_rate_percent(&self) -> MortgageResult<Percent>;
}

impl<F> RateSource for F
where
    F: Fn() -> MortgageResult<Percent>,
{
    fn current_annual_rate_percent(&self) -> MortgageResult<Percent> {
        self()
    }
}

/// A source that always answers with the same rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRate(pub Percent);

impl RateSource for FixedRate {
    fn current_annual_rate_percent(&self) -> MortgageResult<Percent> {
        Ok(self.0)
    }
}

/// Ask `source` for a rate, substituting `fallback` on any failure or on
/// an answer that is not a usable rate.
pub fn rate_or(source: &dyn RateSource, fallback: Percent) -> Percent {
    match source.current_annual_rate_percent() {
        Ok(rate) if rate > Decimal::ZERO => {
            debug!(%rate, "rate source answered");
            rate
        }
        Ok(rate) => {
            warn!(%rate, %fallback, "rate source returned a non-positive rate, using fallback");
            fallback
        }
        Err(e) => {
            warn!(error = %e, %fallback, "rate lookup failed, using fallback");
            fallback
        }
    }
}

/// [`rate_or`] with the 6.0% default.
pub fn rate_or_default(source: &dyn RateSource) -> Percent {
    rate_or(source, DEFAULT_ANNUAL_RATE_PERCENT)
}

/// Source used when no lookup is configured.
pub fn unavailable() -> MortgageResult<Percent> {
    Err(MortgageError::RateSource("no rate source configured".into()))
}
