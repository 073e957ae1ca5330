//! Domain types for repayment calculation.
//!
//! This module provides:
//! - `frequency`: Repayment frequencies with their payments-per-year counts
//! - `error`: Structured error type for validation and numerical failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`RepaymentFrequency`] from `frequency`
//! - [`RepaymentError`], [`InputField`] from `error`

pub mod error;
pub mod frequency;

pub use error::{InputField, RepaymentError};
pub use frequency::RepaymentFrequency;
