use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Rate source unavailable: {0}")]
    RateSource(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Unwrap a checked Decimal operation, naming the quantity that no
    /// longer fits in 96 bits.
    pub(crate) fn checked<T>(value: Option<T>, quantity: &str) -> Result<T, Self> {
        value.ok_or_else(|| {
            MortgageError::invalid(quantity, "Result exceeds the representable decimal range")
        })
    }
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::SerializationError(e.to_string())
    }
}
