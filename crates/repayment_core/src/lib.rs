//! # repayment_core: Periodic Loan Repayment Calculation
//!
//! repayment_core computes the fixed periodic repayment of an amortising
//! loan from four caller-supplied values:
//! - Loan amount (principal)
//! - Annual interest rate, in percent
//! - Loan term, in years
//! - Repayment frequency (`weekly`, `fortnightly`, `monthly`)
//!
//! ## Modules
//!
//! - `calculator`: Validation and the closed-form repayment formula
//! - `form`: Caller-held form state with calculate and reset semantics
//! - `types`: `RepaymentFrequency`, `RepaymentError`, `InputField`
//!
//! ## Purity
//!
//! The calculator holds no state, performs no I/O and never panics on
//! user input. Every call yields exactly one of a [`calculator::RepaymentResult`]
//! or a [`types::RepaymentError`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use repayment_core::calculator::{compute, compute_from_strs};
//! use repayment_core::types::RepaymentFrequency;
//!
//! let result = compute(300_000.0, 4.5, 30.0, RepaymentFrequency::Monthly).unwrap();
//! assert_eq!(result.formatted_amount(), "1520.06");
//! assert_eq!(result.to_string(), "$1520.06 Monthly");
//!
//! // Raw field text, as held by a form
//! let result = compute_from_strs("100000", "0", "10", "monthly").unwrap();
//! assert_eq!(result.amount, 833.33);
//!
//! // Invalid input never produces a partial result
//! let err = compute_from_strs("-100", "5", "10", "monthly").unwrap_err();
//! assert!(err.is_invalid_input());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `RepaymentFrequency` and `RepaymentResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calculator;
pub mod form;
pub mod types;

pub use calculator::{compute, compute_from_strs, LoanInput, RepaymentResult};
pub use form::RepaymentForm;
pub use types::{InputField, RepaymentError, RepaymentFrequency};
