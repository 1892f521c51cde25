pub mod error;
pub mod rate_solver;
pub mod rate_source;
pub mod repayment;
pub mod savings;
pub mod types;
pub mod validation;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "flavor")]
pub mod flavor;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage calculations
pub type MortgageResult<T> = Result<T, MortgageError>;
