//! # Input
//! Turns one line of user text into a [`Request`].

use thiserror::Error;

/// Smallest accepted input.
pub const INPUT_MIN: u32 = 0;
/// Largest accepted input.
pub const INPUT_MAX: u32 = 99999;
/// Typing this instead of a number runs the self-check.
pub const RUN_TESTS: &str = "test";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Evaluate(u32),
    RunTests,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no input given")]
    Empty,
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0} is not between {min} and {max}", min = INPUT_MIN, max = INPUT_MAX)]
    OutOfRange(String),
}

/// Parses a line of input. Surrounding whitespace is ignored.
pub fn parse_input(line: &str) -> Result<Request, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if line == RUN_TESTS {
        return Ok(Request::RunTests);
    }
    if !line.bytes().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber(line.to_string()));
    }
    // only digits are left, so a parse failure can only mean overflow
    match line.parse::<u32>() {
        Ok(val) if (INPUT_MIN..=INPUT_MAX).contains(&val) => Ok(Request::Evaluate(val)),
        _ => Err(InputError::OutOfRange(line.to_string())),
    }
}

#[test]
fn test_parse_input() {
    assert_eq!(parse_input("10"), Ok(Request::Evaluate(10)));
    assert_eq!(parse_input("0"), Ok(Request::Evaluate(0)));
    assert_eq!(parse_input("99999"), Ok(Request::Evaluate(99999)));
    assert_eq!(parse_input(" 42\n"), Ok(Request::Evaluate(42)));
    assert_eq!(parse_input("test"), Ok(Request::RunTests));
}

#[test]
fn test_parse_input_rejects() {
    assert_eq!(parse_input("abc"), Err(InputError::NotANumber("abc".to_string())));
    assert_eq!(parse_input("-2"), Err(InputError::NotANumber("-2".to_string())));
    assert_eq!(parse_input("12abc"), Err(InputError::NotANumber("12abc".to_string())));
    assert_eq!(parse_input(""), Err(InputError::Empty));
    assert_eq!(parse_input(" "), Err(InputError::Empty));
    assert_eq!(parse_input("100000"), Err(InputError::OutOfRange("100000".to_string())));
    assert_eq!(
        parse_input("99999999999999999999"),
        Err(InputError::OutOfRange("99999999999999999999".to_string()))
    );
}

#[test]
fn test_input_error_message() {
    let err = parse_input("100000").unwrap_err();
    assert_eq!(err.to_string(), "100000 is not between 0 and 99999");
}
