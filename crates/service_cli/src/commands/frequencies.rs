//! Frequencies command implementation
//!
//! Lists the repayment frequencies accepted by `compute` and the
//! interactive form.

use std::io::Write;

use repayment_core::RepaymentFrequency;

use crate::Result;

/// Run the frequencies command
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    write_frequencies(&mut stdout.lock())
}

fn write_frequencies<W: Write>(out: &mut W) -> Result<()> {
    for frequency in RepaymentFrequency::ALL {
        let marker = if frequency == RepaymentFrequency::default() {
            " (default)"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<12} {:>2} payments/year{}",
            frequency.as_str(),
            frequency.payments_per_year(),
            marker
        )?;
    }
    Ok(())
}
