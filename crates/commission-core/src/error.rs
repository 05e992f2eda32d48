use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommissionError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Leader distribution shares must sum to 100%, got {total}%")]
    DistributionShareMismatch { total: Decimal },

    #[error("Unknown month: {0} has no configured goal")]
    UnknownMonth(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommissionError {
    fn from(e: serde_json::Error) -> Self {
        CommissionError::SerializationError(e.to_string())
    }
}
