pub mod error;
pub mod types;

#[cfg(feature = "commission")]
pub mod commission;

#[cfg(feature = "editing")]
pub mod editing;

pub use error::CommissionError;

/// Standard result type for fallible operations (editing, validation, parsing).
/// The calculation engine itself is total and returns plain values.
pub type CommissionResult<T> = Result<T, CommissionError>;
