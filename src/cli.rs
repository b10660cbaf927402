use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, info};

use crate::eval::Evaluation;
use crate::input::{parse_input, Request, INPUT_MAX, INPUT_MIN, RUN_TESTS};
use crate::self_check::run_self_check;

#[derive(Debug, Parser)]
#[command(
    name = "rev_pow",
    version,
    about = "Evaluates I^R + I^3 - R^2 + (I*R), where R is the digit reversal of I",
    propagate_version = true
)]
pub struct RevPowCommand {
    /// A number between 0 and 99999, or `test`. Prompted for when missing.
    #[arg(env = "REV_POW_INPUT")]
    number: Option<String>,
    /// Print only the digits of the result.
    #[arg(long, short)]
    quiet: bool,
}

impl RevPowCommand {
    pub fn execute() -> Result<ExitCode> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<ExitCode> {
        let line = match self.number {
            Some(number) => number,
            None => prompt_input()?,
        };

        let mut stdout = io::stdout().lock();
        if respond(&line, self.quiet, &mut stdout)? {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }
}

/// The two lines shown for rejected input.
pub fn invalid_input_message() -> String {
    format!(
        " Error: Invalid Input\n Enter a valid number between {} and {}",
        INPUT_MIN, INPUT_MAX
    )
}

/// Answers one line of input, writing the report to `out`.
/// Returns `false` when the input was rejected or the self-check failed.
pub fn respond<W: Write>(line: &str, quiet: bool, out: &mut W) -> io::Result<bool> {
    match parse_input(line) {
        Ok(Request::Evaluate(input)) => {
            info!(input, "evaluating");
            let eval = Evaluation::new(input);
            if quiet {
                writeln!(out, "{}", eval.result)?;
            } else {
                writeln!(out)?;
                writeln!(out, "{}", eval)?;
                writeln!(out)?;
            }
            Ok(true)
        }
        Ok(Request::RunTests) => run_self_check(out),
        Err(err) => {
            debug!(%err, "rejected input");
            writeln!(out)?;
            writeln!(out, "{}", invalid_input_message())?;
            Ok(false)
        }
    }
}

/// Prompts on the terminal and reads one line. End of input counts as an empty line.
pub fn prompt_input() -> Result<String> {
    let mut editor = DefaultEditor::new()?;
    let prompt = format!(
        " Enter '{}' to run all tests OR Enter a number ({}-{}) :",
        RUN_TESTS, INPUT_MIN, INPUT_MAX
    );
    match editor.readline(&prompt) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

#[test]
fn test_command_args() {
    use clap::CommandFactory;
    RevPowCommand::command().debug_assert();

    let cmd = RevPowCommand::try_parse_from(["rev_pow", "12", "--quiet"]).unwrap();
    assert_eq!(cmd.number.as_deref(), Some("12"));
    assert!(cmd.quiet);

    let cmd = RevPowCommand::try_parse_from(["rev_pow", "-q", "test"]).unwrap();
    assert_eq!(cmd.number.as_deref(), Some("test"));
}

#[cfg(test)]
fn respond_to(line: &str, quiet: bool) -> (bool, String) {
    let mut out = Vec::new();
    let ok = respond(line, quiet, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn test_respond_rejects_invalid_input() {
    for line in ["abc", "100000", "", "-2"] {
        let (ok, out) = respond_to(line, false);
        assert!(!ok, "{:?} should be rejected", line);
        assert_eq!(
            out,
            "\n Error: Invalid Input\n Enter a valid number between 0 and 99999\n",
            "output for {:?}", line
        );
    }
}

#[test]
fn test_respond_evaluates() {
    let (ok, out) = respond_to("12", false);
    assert!(ok);
    assert_eq!(
        out,
        "\n Result: 12^21 + 12^3 - 21^2 + (12*21) is 46005119909369701467651\n\n"
    );

    let (ok, out) = respond_to(" 0 ", true);
    assert!(ok);
    assert_eq!(out, "1\n");
}

#[test]
fn test_respond_runs_self_check() {
    let (ok, out) = respond_to("test", false);
    assert!(ok);
    assert!(out.contains(" Testing evaluate() .. "));
}
