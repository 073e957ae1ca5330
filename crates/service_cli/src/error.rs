//! Error types for the repayment CLI.

use repayment_core::RepaymentError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculation rejected the inputs
    #[error("Repayment error: {0}")]
    Repayment(#[from] RepaymentError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line or session argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Message printed to the user on stderr.
    ///
    /// Calculation errors use the form's wording; everything else uses
    /// the error's display text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Repayment(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use repayment_core::InputField;

    #[test]
    fn test_repayment_error_user_message() {
        let err: CliError = RepaymentError::invalid(InputField::TermYears, "is empty").into();
        assert_eq!(
            err.user_message(),
            "Please enter valid positive numbers for all fields."
        );
        assert!(err.to_string().contains("term years is empty"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::invalid_argument("unknown command 'foo'");
        assert_eq!(err.user_message(), "Invalid argument: unknown command 'foo'");
    }
}
