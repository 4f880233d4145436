//! Core error types for the Foliopulse application.
//!
//! Holdings mutations are all-or-nothing: every variant here is surfaced to
//! the caller as the operation's outcome and the store is left untouched.
//! Quote fetch failures deliberately do NOT appear in this taxonomy - they
//! are degraded to a neutral figure inside the return cache and never
//! propagate as errors (see `returns::ReturnCache`).

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),
}

/// Validation errors for holdings input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// The offending field, in wire-facing casing
        field: &'static str,
    },

    /// The weight was outside the accepted `(0, 100]` percent range.
    #[error("Weight must be greater than 0 and at most 100, got {0}")]
    InvalidWeight(f64),

    /// A holding with the same (case-normalized) symbol already exists.
    #[error("Symbol already exists: {0}")]
    DuplicateSymbol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::HoldingNotFound("DIXON".to_string());
        assert_eq!(format!("{}", error), "Holding not found: DIXON");

        let error = Error::Validation(ValidationError::DuplicateSymbol("TRENT".to_string()));
        assert_eq!(
            format!("{}", error),
            "Input validation failed: Symbol already exists: TRENT"
        );

        let error = Error::Validation(ValidationError::InvalidWeight(120.0));
        assert_eq!(
            format!("{}", error),
            "Input validation failed: Weight must be greater than 0 and at most 100, got 120"
        );
    }
}
