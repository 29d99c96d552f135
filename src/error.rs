//! Error types for the voucher engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing receipts.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the voucher engine.
///
/// Row-level problems in a roster are not errors: those rows are skipped and
/// reported alongside the results. The variants here either abort a whole run
/// or reject a single value at a parsing boundary.
///
/// # Example
///
/// ```
/// use vt_engine::error::EngineError;
///
/// let error = EngineError::InvalidReferenceMonth {
///     value: "2024/03".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid reference month '2024/03': expected YYYY-MM"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The reference month was not a valid `YYYY-MM` value.
    #[error("Invalid reference month '{value}': expected YYYY-MM")]
    InvalidReferenceMonth {
        /// The rejected input.
        value: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The roster as a whole could not be read.
    #[error("Failed to read roster: {message}")]
    RosterParseError {
        /// A description of the failure.
        message: String,
    },

    /// The amount cannot be written out in words.
    #[error("Amount {amount} is outside the supported range for written-out values")]
    AmountOutOfRange {
        /// The rejected amount.
        amount: Decimal,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
