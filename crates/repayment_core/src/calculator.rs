//! Periodic repayment calculation.
//!
//! Validates loan parameters and applies the fixed-rate amortising
//! payment formula:
//!
//! ```text
//! i = (annual_rate_percent / 100) / k
//! n = term_years * k
//! payment = P / n                                  if i == 0
//! payment = P * i * (1 + i)^n / ((1 + i)^n - 1)     otherwise
//! ```
//!
//! where `k` is the number of payments per year for the chosen frequency.
//! `n` is not truncated, so fractional terms such as 2.5 years are priced
//! as written.
//!
//! # Rounding
//!
//! Amounts are rounded to cents half away from zero on the binary value
//! scaled by 100, see [`round_to_cents`].
//!
//! # Examples
//!
//! ```
//! use repayment_core::calculator::{compute, LoanInput};
//! use repayment_core::types::RepaymentFrequency;
//!
//! let input = LoanInput::new(50_000.0, 6.0, 15.0, RepaymentFrequency::Weekly).unwrap();
//! assert_eq!(input.payment_count(), 780.0);
//! assert_eq!(input.repayment().unwrap().amount, 97.25);
//!
//! assert!(compute(0.0, 5.0, 10.0, RepaymentFrequency::Monthly).is_err());
//! ```

use std::fmt;

use crate::types::{InputField, RepaymentError, RepaymentFrequency};

/// Validated loan parameters for a single calculation.
///
/// Can only be built through [`LoanInput::new`] or [`LoanInput::parse`],
/// so every value satisfies the field constraints:
/// - `principal` finite and strictly positive
/// - `annual_rate_percent` finite and non-negative
/// - `term_years` finite and strictly positive
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoanInput {
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    frequency: RepaymentFrequency,
}

impl LoanInput {
    /// Validate numeric loan parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RepaymentError::InvalidInput`] naming the first field that
    /// is non-finite or violates its sign constraint, checked in the order
    /// principal, rate, term.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_years: f64,
        frequency: RepaymentFrequency,
    ) -> Result<Self, RepaymentError> {
        require_positive(InputField::Principal, principal)?;
        require_non_negative(InputField::AnnualRate, annual_rate_percent)?;
        require_positive(InputField::TermYears, term_years)?;

        Ok(Self {
            principal,
            annual_rate_percent,
            term_years,
            frequency,
        })
    }

    /// Parse and validate raw field text.
    ///
    /// Surrounding whitespace is ignored; the remaining text must be a
    /// complete number. The frequency must be an exact identifier accepted
    /// by [`RepaymentFrequency`]'s `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use repayment_core::calculator::LoanInput;
    /// use repayment_core::types::{InputField, RepaymentFrequency};
    ///
    /// let input = LoanInput::parse(" 300000 ", "4.5", "30", "monthly").unwrap();
    /// assert_eq!(input.frequency(), RepaymentFrequency::Monthly);
    ///
    /// let err = LoanInput::parse("abc", "4.5", "30", "monthly").unwrap_err();
    /// assert_eq!(err.field(), Some(InputField::Principal));
    /// ```
    pub fn parse(
        principal: &str,
        annual_rate_percent: &str,
        term_years: &str,
        frequency: &str,
    ) -> Result<Self, RepaymentError> {
        let principal = parse_number(InputField::Principal, principal)?;
        let annual_rate_percent = parse_number(InputField::AnnualRate, annual_rate_percent)?;
        let term_years = parse_number(InputField::TermYears, term_years)?;
        let frequency = frequency.parse::<RepaymentFrequency>()?;

        Self::new(principal, annual_rate_percent, term_years, frequency)
    }

    /// Loan amount.
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Annual interest rate in percent.
    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    /// Loan term in years.
    pub fn term_years(&self) -> f64 {
        self.term_years
    }

    /// Repayment frequency.
    pub fn frequency(&self) -> RepaymentFrequency {
        self.frequency
    }

    /// Periodic interest rate `i`.
    pub fn periodic_rate(&self) -> f64 {
        (self.annual_rate_percent / 100.0) / f64::from(self.frequency.payments_per_year())
    }

    /// Total number of payments `n`, not rounded or truncated.
    pub fn payment_count(&self) -> f64 {
        self.term_years * f64::from(self.frequency.payments_per_year())
    }

    /// Unrounded periodic payment.
    ///
    /// May be non-finite when `(1 + i)^n` overflows; [`LoanInput::repayment`]
    /// turns that case into an error.
    pub fn exact_payment(&self) -> f64 {
        periodic_payment(self.principal, self.periodic_rate(), self.payment_count())
    }

    /// Compute the rounded periodic repayment.
    ///
    /// # Errors
    ///
    /// Returns [`RepaymentError::NonFiniteResult`] when the formula does not
    /// yield a finite amount.
    pub fn repayment(&self) -> Result<RepaymentResult, RepaymentError> {
        let payment_count = self.payment_count();
        let periodic_rate = self.periodic_rate();
        let amount = round_to_cents(periodic_payment(
            self.principal,
            periodic_rate,
            payment_count,
        ));

        if !amount.is_finite() {
            return Err(RepaymentError::NonFiniteResult {
                payment_count,
                periodic_rate,
            });
        }

        Ok(RepaymentResult {
            amount,
            frequency: self.frequency,
        })
    }
}

/// Outcome of a successful calculation.
///
/// # Examples
///
/// ```
/// use repayment_core::calculator::RepaymentResult;
/// use repayment_core::types::RepaymentFrequency;
///
/// let result = RepaymentResult { amount: 674.15, frequency: RepaymentFrequency::Fortnightly };
/// assert_eq!(result.formatted_amount(), "674.15");
/// assert_eq!(result.to_string(), "$674.15 Fortnightly");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepaymentResult {
    /// Periodic repayment rounded to 2 decimal places
    pub amount: f64,
    /// Frequency the amount is paid at, echoed from the input
    pub frequency: RepaymentFrequency,
}

impl RepaymentResult {
    /// Amount with exactly two decimal places, e.g. `"833.30"`.
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

impl fmt::Display for RepaymentResult {
    /// Formats as `$<amount> <Label>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2} {}", self.amount, self.frequency.label())
    }
}

/// Validate numeric inputs and compute the periodic repayment.
///
/// # Errors
///
/// - [`RepaymentError::InvalidInput`] if any constraint is violated
/// - [`RepaymentError::NonFiniteResult`] if the formula overflows
///
/// # Examples
///
/// ```
/// use repayment_core::calculator::compute;
/// use repayment_core::types::RepaymentFrequency;
///
/// let result = compute(100_000.0, 0.0, 10.0, RepaymentFrequency::Monthly).unwrap();
/// assert_eq!(result.amount, 833.33);
/// ```
pub fn compute(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    frequency: RepaymentFrequency,
) -> Result<RepaymentResult, RepaymentError> {
    LoanInput::new(principal, annual_rate_percent, term_years, frequency)?.repayment()
}

/// Parse raw field text and compute the periodic repayment.
///
/// Parse failures are reported as [`RepaymentError::InvalidInput`] for the
/// offending field.
pub fn compute_from_strs(
    principal: &str,
    annual_rate_percent: &str,
    term_years: &str,
    frequency: &str,
) -> Result<RepaymentResult, RepaymentError> {
    LoanInput::parse(principal, annual_rate_percent, term_years, frequency)?.repayment()
}

/// Fixed-rate amortising payment for `n` periods at periodic rate `i`.
///
/// `(1 + i)^n - 1` is evaluated as `exp_m1(n * ln_1p(i))` so that tiny
/// positive rates keep their precision instead of cancelling against 1.
/// A zero rate, or one so small that the accrued growth is subnormal, falls
/// back to straight-line division `principal / n`.
/// No validation is performed.
///
/// # Examples
///
/// ```
/// use repayment_core::calculator::periodic_payment;
///
/// let straight_line = periodic_payment(100_000.0, 0.0, 120.0);
/// let near_zero = periodic_payment(100_000.0, 1e-18, 120.0);
/// assert!((near_zero - straight_line).abs() < 1e-9);
/// ```
#[inline]
pub fn periodic_payment(principal: f64, periodic_rate: f64, payment_count: f64) -> f64 {
    if periodic_rate == 0.0 {
        return principal / payment_count;
    }

    let accrued = (payment_count * periodic_rate.ln_1p()).exp_m1();
    if accrued < f64::MIN_POSITIVE {
        return principal / payment_count;
    }

    principal * (periodic_rate / accrued) * (accrued + 1.0)
}

/// Round to 2 decimal places, ties away from zero.
///
/// # Examples
///
/// ```
/// use repayment_core::calculator::round_to_cents;
///
/// assert_eq!(round_to_cents(1520.0559), 1520.06);
/// assert_eq!(round_to_cents(0.125), 0.13);
/// assert_eq!(round_to_cents(-0.125), -0.13);
/// ```
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_number(field: InputField, raw: &str) -> Result<f64, RepaymentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RepaymentError::invalid(field, "is empty"));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| RepaymentError::invalid(field, format!("'{}' is not a number", trimmed)))
}

fn require_positive(field: InputField, value: f64) -> Result<(), RepaymentError> {
    if !value.is_finite() {
        return Err(RepaymentError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(RepaymentError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn require_non_negative(field: InputField, value: f64) -> Result<(), RepaymentError> {
    if !value.is_finite() {
        return Err(RepaymentError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(RepaymentError::invalid(field, "must not be negative"));
    }
    Ok(())
}
