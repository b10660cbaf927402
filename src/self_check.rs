//! # Self Check
//! Known-answer checks that the binary runs when the user types `test`.
//! Each case prints one `label .. pass` line, or `label .. fail (got)` when the answer differs.

use std::io::{self, Write};

use big_dec::{add, multiply, reverse_digits, reverse_integer};
use tracing::warn;

use crate::eval::evaluate;
use crate::input::{parse_input, InputError, Request};

struct Case {
    label: &'static str,
    got: String,
    expected: String,
}

impl Case {
    fn new(label: &'static str, got: impl ToString, expected: impl ToString) -> Self {
        Case { label, got: got.to_string(), expected: expected.to_string() }
    }
    fn passed(&self) -> bool {
        self.got == self.expected
    }
}

fn describe(request: Result<Request, InputError>) -> String {
    match request {
        Ok(Request::Evaluate(val)) => val.to_string(),
        Ok(Request::RunTests) => "test".to_string(),
        Err(_) => "invalid".to_string(),
    }
}

fn groups() -> Vec<(&'static str, Vec<Case>)> {
    vec![
        ("parse_input", vec![
            Case::new("10", describe(parse_input("10")), "10"),
            Case::new("abc", describe(parse_input("abc")), "invalid"),
            Case::new("-2", describe(parse_input("-2")), "invalid"),
            Case::new("'' (empty)", describe(parse_input("")), "invalid"),
            Case::new("' ' (space)", describe(parse_input(" ")), "invalid"),
        ]),
        ("reverse", vec![
            Case::new("'987'", reverse_digits("987"), "789"),
            Case::new("'' (empty)", reverse_digits(""), ""),
            Case::new("12345", reverse_integer(12345), 54321),
            Case::new("0", reverse_integer(0), 0),
            Case::new("120", reverse_integer(120), 21),
        ]),
        ("multiply", vec![
            Case::new("'10' * '2'", multiply("10", "2"), "20"),
            Case::new("'2' * '10'", multiply("2", "10"), "20"),
            Case::new("'10' * '0'", multiply("10", "0"), "0"),
            Case::new("'10' * ''", multiply("10", ""), "0"),
        ]),
        ("add", vec![
            Case::new("'10' + '200'", add("10", "200"), "210"),
            Case::new("'200' + '10'", add("200", "10"), "210"),
            Case::new("'0' + '10'", add("0", "10"), "10"),
            Case::new("'' + '10'", add("", "10"), "10"),
        ]),
        ("evaluate", vec![
            Case::new("0", evaluate(0), "1"),
            Case::new("12", evaluate(12), "46005119909369701467651"),
        ]),
    ]
}

/// Runs every check, writing a report to `out`. Returns whether all of them passed.
pub fn run_self_check<W: Write>(out: &mut W) -> io::Result<bool> {
    report(out, groups())
}

fn report<W: Write>(out: &mut W, groups: Vec<(&'static str, Vec<Case>)>) -> io::Result<bool> {
    let mut all_passed = true;
    for (name, cases) in groups {
        writeln!(out)?;
        writeln!(out, " Testing {}() .. ", name)?;
        for case in &cases {
            if case.passed() {
                writeln!(out, "    {:<16}.. pass", case.label)?;
            } else {
                all_passed = false;
                warn!(check = name, case = case.label, got = %case.got, expected = %case.expected, "self check failed");
                writeln!(out, "    {:<16}.. fail ({})", case.label, case.got)?;
            }
        }
    }
    Ok(all_passed)
}

#[test]
fn test_self_check_passes() {
    let mut out = Vec::new();
    assert!(run_self_check(&mut out).unwrap());
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains(" Testing multiply() .. "));
    assert!(out.contains("    '10' * '2'      .. pass"));
    assert!(!out.contains("fail"));
}

#[test]
fn test_report_flags_failure() {
    let cases = vec![
        Case::new("'1' + '1'", add("1", "1"), "2"),
        Case::new("'2' + '2'", add("2", "2"), "5"),
    ];
    let mut out = Vec::new();
    assert!(!report(&mut out, vec![("add", cases)]).unwrap());
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("    '1' + '1'       .. pass"));
    assert!(out.contains("    '2' + '2'       .. fail (4)"));
}
