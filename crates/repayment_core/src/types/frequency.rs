//! Repayment frequency types.
//!
//! This module provides the supported repayment schedules together with
//! the number of payments each one makes per year.
//!
//! # Examples
//!
//! ```
//! use repayment_core::types::frequency::RepaymentFrequency;
//!
//! let weekly: RepaymentFrequency = "weekly".parse().unwrap();
//! assert_eq!(weekly.payments_per_year(), 52);
//! assert_eq!(weekly.label(), "Weekly");
//!
//! assert_eq!(RepaymentFrequency::default(), RepaymentFrequency::Monthly);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::{InputField, RepaymentError};

/// Repayment frequency selector.
///
/// Enum-based so that the payments-per-year mapping is resolved by a
/// single exhaustive match.
///
/// # Variants
/// - `Weekly`: 52 payments per year
/// - `Fortnightly`: 26 payments per year
/// - `Monthly`: 12 payments per year (default)
///
/// # Examples
///
/// ```
/// use repayment_core::types::frequency::RepaymentFrequency;
///
/// assert_eq!(RepaymentFrequency::Fortnightly.payments_per_year(), 26);
/// assert_eq!(RepaymentFrequency::Monthly.as_str(), "monthly");
///
/// // Identifiers are matched exactly
/// assert!("Monthly".parse::<RepaymentFrequency>().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RepaymentFrequency {
    /// One payment every week
    Weekly,

    /// One payment every two weeks
    Fortnightly,

    /// One payment every calendar month
    #[default]
    Monthly,
}

impl RepaymentFrequency {
    /// All supported frequencies, shortest period first.
    pub const ALL: [RepaymentFrequency; 3] = [
        RepaymentFrequency::Weekly,
        RepaymentFrequency::Fortnightly,
        RepaymentFrequency::Monthly,
    ];

    /// Returns the number of payments made per year.
    ///
    /// # Examples
    ///
    /// ```
    /// use repayment_core::types::frequency::RepaymentFrequency;
    ///
    /// assert_eq!(RepaymentFrequency::Weekly.payments_per_year(), 52);
    /// assert_eq!(RepaymentFrequency::Fortnightly.payments_per_year(), 26);
    /// assert_eq!(RepaymentFrequency::Monthly.payments_per_year(), 12);
    /// ```
    pub fn payments_per_year(&self) -> u32 {
        match self {
            RepaymentFrequency::Weekly => 52,
            RepaymentFrequency::Fortnightly => 26,
            RepaymentFrequency::Monthly => 12,
        }
    }

    /// Returns the lowercase identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentFrequency::Weekly => "weekly",
            RepaymentFrequency::Fortnightly => "fortnightly",
            RepaymentFrequency::Monthly => "monthly",
        }
    }

    /// Returns the capitalised label shown next to a computed amount.
    pub fn label(&self) -> &'static str {
        match self {
            RepaymentFrequency::Weekly => "Weekly",
            RepaymentFrequency::Fortnightly => "Fortnightly",
            RepaymentFrequency::Monthly => "Monthly",
        }
    }
}

impl FromStr for RepaymentFrequency {
    type Err = RepaymentError;

    /// Parses a frequency identifier.
    ///
    /// Only the exact lowercase identifiers `weekly`, `fortnightly` and
    /// `monthly` are recognised; anything else is an invalid input.
    fn from_str(s: &str) -> Result<Self, RepaymentError> {
        match s {
            "weekly" => Ok(RepaymentFrequency::Weekly),
            "fortnightly" => Ok(RepaymentFrequency::Fortnightly),
            "monthly" => Ok(RepaymentFrequency::Monthly),
            _ => Err(RepaymentError::invalid(
                InputField::Frequency,
                format!("unrecognised frequency '{}'", s),
            )),
        }
    }
}

impl fmt::Display for RepaymentFrequency {
    /// Formats as the lowercase identifier.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
