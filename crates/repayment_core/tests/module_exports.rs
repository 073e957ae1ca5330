//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths
//! and through the crate-root re-exports.

/// Test that calculator items are accessible via absolute path.
#[test]
fn test_calculator_module_exports() {
    use repayment_core::calculator::compute;
    use repayment_core::calculator::compute_from_strs;
    use repayment_core::calculator::periodic_payment;
    use repayment_core::calculator::round_to_cents;
    use repayment_core::calculator::LoanInput;
    use repayment_core::calculator::RepaymentResult;
    use repayment_core::types::RepaymentFrequency;

    let result: RepaymentResult = compute(1200.0, 0.0, 1.0, RepaymentFrequency::Monthly).unwrap();
    assert_eq!(result.amount, 100.0);

    let _ = compute_from_strs("1200", "0", "1", "monthly");
    let _ = periodic_payment(1200.0, 0.01, 12.0);
    let _ = round_to_cents(1.005);
    let _ = LoanInput::new(1200.0, 0.0, 1.0, RepaymentFrequency::Monthly);
}

/// Test that type items are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use repayment_core::types::error::InputField;
    use repayment_core::types::error::RepaymentError;
    use repayment_core::types::frequency::RepaymentFrequency;

    let err = RepaymentError::invalid(InputField::Principal, "is empty");
    assert!(err.is_invalid_input());
    assert_eq!(RepaymentFrequency::Weekly.payments_per_year(), 52);
}

/// Test crate-root re-exports.
#[test]
fn test_root_reexports() {
    use repayment_core::{
        compute, compute_from_strs, InputField, LoanInput, RepaymentError, RepaymentForm,
        RepaymentFrequency, RepaymentResult,
    };

    let from_root: Result<RepaymentResult, RepaymentError> =
        compute(300_000.0, 4.5, 30.0, RepaymentFrequency::Monthly);
    assert_eq!(from_root.unwrap().amount, 1520.06);

    let err = compute_from_strs("1", "1", "1", "hourly").unwrap_err();
    assert_eq!(err.field(), Some(InputField::Frequency));

    let input = LoanInput::parse("1", "0", "1", "weekly").unwrap();
    assert_eq!(input.payment_count(), 52.0);

    let form = RepaymentForm::default();
    assert_eq!(form.frequency(), "monthly");
}
