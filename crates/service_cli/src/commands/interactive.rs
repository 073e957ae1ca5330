//! Interactive command implementation
//!
//! Line-oriented repayment form. Each input line is one command:
//!
//! ```text
//! amount 300000
//! rate 4.5
//! years 30
//! frequency weekly
//! calculate
//! reset
//! ```
//!
//! The session holds a [`RepaymentForm`] for its whole lifetime, so fields
//! persist between calculations until `reset`.

use std::io::{BufRead, Write};

use repayment_core::{RepaymentForm, RepaymentFrequency};
use tracing::{debug, info};

use crate::{CliError, Result};

const HELP: &str = "\
Commands:
  amount <value>      Set the loan amount
  rate <value>        Set the annual interest rate (%)
  years <value>       Set the loan term in years
  frequency <value>   Set the frequency (weekly, fortnightly, monthly)
  calculate           Calculate the repayment
  reset               Clear all fields
  show                Show the current fields
  help                Show this help
  quit                End the session";

/// One parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Set the loan amount text
    Amount(String),
    /// Set the annual rate text
    Rate(String),
    /// Set the term text
    Years(String),
    /// Set the frequency selector
    Frequency(String),
    /// Run the calculator
    Calculate,
    /// Restore defaults
    Reset,
    /// Print current fields
    Show,
    /// Print command list
    Help,
    /// End the session
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (keyword, value) = match line.split_once(char::is_whitespace) {
            Some((keyword, value)) => (keyword, value.trim()),
            None => (line, ""),
        };

        let keyword = keyword.to_lowercase();
        let command = match keyword.as_str() {
            "amount" => Ok(Self::Amount(value.to_string())),
            "rate" => Ok(Self::Rate(value.to_string())),
            "years" => Ok(Self::Years(value.to_string())),
            "frequency" => Ok(Self::Frequency(value.to_string())),
            "calculate" => Ok(Self::Calculate),
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => {
                return Some(Err(CliError::invalid_argument(format!(
                    "unknown command '{}'",
                    other
                ))))
            }
        };

        let takes_value = matches!(
            command,
            Ok(Self::Amount(_) | Self::Rate(_) | Self::Years(_) | Self::Frequency(_))
        );
        if !takes_value && !value.is_empty() {
            return Some(Err(CliError::invalid_argument(format!(
                "'{}' takes no value",
                keyword
            ))));
        }
        Some(command)
    }
}

/// Run the interactive command on stdin/stdout
pub fn run() -> Result<()> {
    info!("Starting interactive session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut form = RepaymentForm::new();
    run_session(&mut form, stdin.lock(), &mut stdout.lock())?;

    info!("Interactive session ended");
    Ok(())
}

/// Drive `form` from `input` until end of input or `quit`.
///
/// Unknown commands are reported on `output` and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    form: &mut RepaymentForm,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Loan repayment calculator. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match SessionCommand::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(err)) => {
                writeln!(output, "{}", err.user_message())?;
                continue;
            }
        };
        debug!(?command, "Session command");

        match command {
            SessionCommand::Amount(value) => form.set_loan_amount(value),
            SessionCommand::Rate(value) => form.set_interest_rate(value),
            SessionCommand::Years(value) => form.set_loan_years(value),
            SessionCommand::Frequency(value) => form.set_frequency(value),
            SessionCommand::Calculate => {
                if let Err(err) = form.calculate() {
                    debug!(error = %err, "Calculation rejected");
                }
                if let Some(text) = form.display() {
                    writeln!(output, "{}", text)?;
                }
            }
            SessionCommand::Reset => {
                form.reset();
                writeln!(output, "Form reset.")?;
            }
            SessionCommand::Show => write_fields(form, output)?,
            SessionCommand::Help => writeln!(output, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn write_fields<W: Write>(form: &RepaymentForm, output: &mut W) -> Result<()> {
    let options: Vec<&str> = RepaymentFrequency::ALL.iter().map(|f| f.as_str()).collect();
    writeln!(output, "Loan amount:    {}", form.loan_amount())?;
    writeln!(output, "Interest rate:  {}", form.interest_rate())?;
    writeln!(output, "Loan years:     {}", form.loan_years())?;
    writeln!(
        output,
        "Frequency:      {} ({})",
        form.frequency(),
        options.join(" | ")
    )?;
    Ok(())
}
