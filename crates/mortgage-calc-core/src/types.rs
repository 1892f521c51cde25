use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Periodic rates expressed as decimals (0.0025 = 0.25% per month).
pub type Rate = Decimal;

/// Annual nominal rates quoted as percentages (3.5 = 3.5% p.a.), the way
/// borrowers and lenders state them.
pub type Percent = Decimal;

/// How the annual nominal rate is turned into a monthly period rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// `annual / 12`, applied once per month.
    #[default]
    MonthlyEffective,
    /// Daily rate `annual / 365` compounded over a 30-day month.
    /// An approximation; months are not calendar-accurate.
    DailyThirtyDay,
}

impl Compounding {
    pub fn label(&self) -> &'static str {
        match self {
            Compounding::MonthlyEffective => "monthly effective (annual / 12)",
            Compounding::DailyThirtyDay => "daily compounded over a 30-day month",
        }
    }
}

/// The loan being quoted. Validated by the input surface, see
/// [`crate::validation::InputLimits`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Outstanding principal.
    pub principal: Money,
    /// Remaining term in whole years.
    pub term_years: u32,
    /// Annual nominal interest rate, e.g. 3.5 for 3.5%.
    pub annual_rate_percent: Percent,
}

impl LoanParameters {
    pub fn total_payments(&self) -> u32 {
        self.term_years * 12
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
