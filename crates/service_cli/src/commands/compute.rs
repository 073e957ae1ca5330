//! Compute command implementation
//!
//! Computes a single periodic repayment from command-line values.

use std::io::Write;

use repayment_core::{LoanInput, RepaymentFrequency, RepaymentResult};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::Result;

/// JSON view of a computed repayment and the values it was derived from.
#[derive(Debug, Serialize)]
struct RepaymentReport {
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    frequency: RepaymentFrequency,
    payments_per_year: u32,
    payment_count: f64,
    periodic_rate: f64,
    amount: f64,
    formatted_amount: String,
    display: String,
}

impl RepaymentReport {
    fn new(input: &LoanInput, result: &RepaymentResult) -> Self {
        Self {
            principal: input.principal(),
            annual_rate_percent: input.annual_rate_percent(),
            term_years: input.term_years(),
            frequency: result.frequency,
            payments_per_year: result.frequency.payments_per_year(),
            payment_count: input.payment_count(),
            periodic_rate: input.periodic_rate(),
            amount: result.amount,
            formatted_amount: result.formatted_amount(),
            display: result.to_string(),
        }
    }
}

/// Run the compute command
pub fn run(
    amount: &str,
    rate: &str,
    years: &str,
    frequency: &str,
    format: OutputFormat,
) -> Result<()> {
    info!(amount, rate, years, frequency, %format, "Computing repayment");

    let input = LoanInput::parse(amount, rate, years, frequency)?;
    let result = input.repayment()?;

    info!(amount = %result.formatted_amount(), frequency = %result.frequency, "Repayment computed");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&input, &result, format, &mut out)
}

/// Write `result` to `out` in the requested format.
pub fn render<W: Write>(
    input: &LoanInput,
    result: &RepaymentResult,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            writeln!(out, "{}", result)?;
        }
        OutputFormat::Json => {
            let report = RepaymentReport::new(input, result);
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let rows = [
                ("Loan amount", format!("{:.2}", input.principal())),
                ("Annual rate (%)", input.annual_rate_percent().to_string()),
                ("Term (years)", input.term_years().to_string()),
                ("Frequency", result.frequency.label().to_string()),
                ("Payments", input.payment_count().to_string()),
                ("Periodic rate", format!("{:.8}", input.periodic_rate())),
                ("Repayment", format!("${}", result.formatted_amount())),
            ];

            writeln!(out, "┌──────────────────┬──────────────────┐")?;
            for (label, value) in rows {
                writeln!(out, "│ {:<16} │ {:>16} │", label, value)?;
            }
            writeln!(out, "└──────────────────┴──────────────────┘")?;
        }
    }
    Ok(())
}
