//! Caller-held repayment form state.
//!
//! [`RepaymentForm`] keeps the raw text of each field the way a form
//! widget would, runs the calculator on demand, and holds the latest
//! outcome for display. The outcome slot is a single
//! `Option<Result<..>>`, so a result and an error are never shown together.
//!
//! # Examples
//!
//! ```
//! use repayment_core::form::RepaymentForm;
//!
//! let mut form = RepaymentForm::new();
//! form.set_loan_amount("300000");
//! form.set_interest_rate("4.5");
//! form.set_loan_years("30");
//!
//! form.calculate();
//! assert_eq!(form.display().as_deref(), Some("$1520.06 Monthly"));
//!
//! form.reset();
//! assert_eq!(form.loan_amount(), "");
//! assert!(form.display().is_none());
//! ```

use crate::calculator::{compute_from_strs, RepaymentResult};
use crate::types::{RepaymentError, RepaymentFrequency};

/// Raw form fields plus the outcome of the last calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct RepaymentForm {
    loan_amount: String,
    interest_rate: String,
    loan_years: String,
    frequency: String,
    outcome: Option<Result<RepaymentResult, RepaymentError>>,
}

impl Default for RepaymentForm {
    fn default() -> Self {
        Self {
            loan_amount: String::new(),
            interest_rate: String::new(),
            loan_years: String::new(),
            frequency: RepaymentFrequency::default().as_str().to_string(),
            outcome: None,
        }
    }
}

impl RepaymentForm {
    /// Create a form with empty fields and the monthly frequency selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw loan amount text.
    pub fn loan_amount(&self) -> &str {
        &self.loan_amount
    }

    /// Raw annual interest rate text.
    pub fn interest_rate(&self) -> &str {
        &self.interest_rate
    }

    /// Raw loan term text.
    pub fn loan_years(&self) -> &str {
        &self.loan_years
    }

    /// Raw frequency selector value.
    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    /// Set the loan amount text.
    pub fn set_loan_amount(&mut self, value: impl Into<String>) {
        self.loan_amount = value.into();
    }

    /// Set the annual interest rate text.
    pub fn set_interest_rate(&mut self, value: impl Into<String>) {
        self.interest_rate = value.into();
    }

    /// Set the loan term text.
    pub fn set_loan_years(&mut self, value: impl Into<String>) {
        self.loan_years = value.into();
    }

    /// Set the frequency selector value.
    ///
    /// The value is not checked until [`RepaymentForm::calculate`].
    pub fn set_frequency(&mut self, value: impl Into<String>) {
        self.frequency = value.into();
    }

    /// Run the calculator on the current fields.
    ///
    /// Any previous result or error is replaced by the new outcome, which
    /// is also returned.
    pub fn calculate(&mut self) -> &Result<RepaymentResult, RepaymentError> {
        let outcome = compute_from_strs(
            &self.loan_amount,
            &self.interest_rate,
            &self.loan_years,
            &self.frequency,
        );
        self.outcome.insert(outcome)
    }

    /// Restore every field to its default and clear the outcome.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Result of the last calculation, if it succeeded.
    pub fn repayment(&self) -> Option<&RepaymentResult> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    /// Error from the last calculation, if it failed.
    pub fn error(&self) -> Option<&RepaymentError> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().err())
    }

    /// User-facing message for the last error, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(RepaymentError::user_message)
    }

    /// Text to show in the result area: the formatted repayment or the
    /// error message. `None` before the first calculation and after reset.
    pub fn display(&self) -> Option<String> {
        match self.outcome.as_ref()? {
            Ok(result) => Some(result.to_string()),
            Err(err) => Some(err.user_message().to_string()),
        }
    }
}
