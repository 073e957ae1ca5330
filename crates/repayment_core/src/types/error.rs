//! Error types for structured error handling.
//!
//! This module provides:
//! - `RepaymentError`: Validation and numerical failures from repayment calculation
//! - `InputField`: Identifies which caller-supplied field failed validation

use std::fmt;
use thiserror::Error;

/// Message shown when a numeric field is missing, unparsable or out of range.
pub const INVALID_NUMBERS_MESSAGE: &str = "Please enter valid positive numbers for all fields.";

/// Message shown when the frequency selector holds an unknown value.
pub const INVALID_FREQUENCY_MESSAGE: &str = "Invalid repayment frequency selected.";

/// Message shown when the formula overflows for otherwise valid inputs.
pub const NON_FINITE_MESSAGE: &str = "The repayment could not be calculated for these inputs.";

/// Caller-supplied field that failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Loan amount
    Principal,
    /// Annual interest rate in percent
    AnnualRate,
    /// Loan term in years
    TermYears,
    /// Repayment frequency selector
    Frequency,
}

impl InputField {
    /// Returns the field name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            InputField::Principal => "principal",
            InputField::AnnualRate => "annual rate",
            InputField::TermYears => "term years",
            InputField::Frequency => "frequency",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Categorised repayment calculation errors.
///
/// Every failure is recoverable by correcting the input and calling again;
/// no variant carries a partial result.
///
/// # Variants
/// - `InvalidInput`: A field failed to parse, violated its sign constraint,
///   or named an unrecognised frequency
/// - `NonFiniteResult`: The formula overflowed to an infinite or NaN payment
///
/// # Examples
/// ```
/// use repayment_core::types::{InputField, RepaymentError};
///
/// let err = RepaymentError::invalid(InputField::Principal, "must be greater than zero");
/// assert_eq!(format!("{}", err), "Invalid input: principal must be greater than zero");
/// assert_eq!(err.user_message(), "Please enter valid positive numbers for all fields.");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepaymentError {
    /// A caller-supplied value was rejected before any arithmetic.
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        /// Field that failed validation
        field: InputField,
        /// Description of the violated constraint
        reason: String,
    },

    /// The repayment formula did not produce a finite amount.
    #[error(
        "Non-finite repayment for {payment_count} payments at periodic rate {periodic_rate}"
    )]
    NonFiniteResult {
        /// Total number of payments `n`
        payment_count: f64,
        /// Periodic interest rate `i`
        periodic_rate: f64,
    },
}

impl RepaymentError {
    /// Create an invalid input error for `field`.
    pub fn invalid(field: InputField, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns the field that failed validation, if any.
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            Self::NonFiniteResult { .. } => None,
        }
    }

    /// Returns the single human-readable message a form should display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput {
                field: InputField::Frequency,
                ..
            } => INVALID_FREQUENCY_MESSAGE,
            Self::InvalidInput { .. } => INVALID_NUMBERS_MESSAGE,
            Self::NonFiniteResult { .. } => NON_FINITE_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = RepaymentError::invalid(InputField::TermYears, "must be greater than zero");
        assert_eq!(
            format!("{}", err),
            "Invalid input: term years must be greater than zero"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let err = RepaymentError::NonFiniteResult {
            payment_count: 520.0,
            periodic_rate: 0.5,
        };
        assert_eq!(
            format!("{}", err),
            "Non-finite repayment for 520 payments at periodic rate 0.5"
        );
    }

    #[test]
    fn test_user_messages() {
        for field in [
            InputField::Principal,
            InputField::AnnualRate,
            InputField::TermYears,
        ] {
            let err = RepaymentError::invalid(field, "is not a number");
            assert_eq!(err.user_message(), INVALID_NUMBERS_MESSAGE);
        }

        let err = RepaymentError::invalid(InputField::Frequency, "unrecognised");
        assert_eq!(err.user_message(), INVALID_FREQUENCY_MESSAGE);

        let err = RepaymentError::NonFiniteResult {
            payment_count: 1.0,
            periodic_rate: 1.0,
        };
        assert_eq!(err.user_message(), NON_FINITE_MESSAGE);
    }

    #[test]
    fn test_field_accessor() {
        let err = RepaymentError::invalid(InputField::AnnualRate, "must not be negative");
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some(InputField::AnnualRate));

        let err = RepaymentError::NonFiniteResult {
            payment_count: 1.0,
            periodic_rate: 1.0,
        };
        assert!(!err.is_invalid_input());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = RepaymentError::invalid(InputField::Principal, "is not a number");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = RepaymentError::invalid(InputField::Principal, "is not a number");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
