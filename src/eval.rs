//! # Eval
//! Computes `X = I^R + I^3 - R^2 + I*R`, where `R` is the digit reversal of `I`.
//!
//! `I^R` goes through the decimal-string arithmetic of [`big_dec`]. The other three terms are
//! small enough for native integers and are folded in with a single decimal addition at the end.

use std::fmt::Display;

use big_dec::{add, pow, reverse_integer};
use tracing::{debug, trace};

/// Evaluates the expression for `input` and returns the canonical decimal result.
pub fn evaluate(input: u32) -> String {
    evaluate_with_reverse(input, reverse_integer(input))
}

fn evaluate_with_reverse(input: u32, reverse: u32) -> String {
    // I^R
    let power = pow(&input.to_string(), reverse);
    trace!(input, reverse, len = power.len(), "computed power term");

    // I^3 - R^2 + I*R, adding before subtracting keeps every intermediate non-negative
    let i = u128::from(input);
    let r = u128::from(reverse);
    let cube = i * i * i;
    let square = r * r;
    let product = i * r;
    let poly = cube + product - square;
    debug!(cube, square, product, poly, "computed polynomial terms");

    add(&poly.to_string(), &power)
}

/// One evaluated input, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub input: u32,
    pub reverse: u32,
    pub result: String,
}

impl Evaluation {
    pub fn new(input: u32) -> Self {
        let reverse = reverse_integer(input);
        let result = evaluate_with_reverse(input, reverse);
        Evaluation { input, reverse, result }
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Evaluation { input, reverse, result } = self;
        write!(
            f,
            " Result: {input}^{reverse} + {input}^3 - {reverse}^2 + ({input}*{reverse}) is {result}"
        )
    }
}

#[test]
fn test_evaluate_zero() {
    // 0^0 + 0 - 0 + 0
    assert_eq!(evaluate(0), "1");
}

#[test]
fn test_evaluate_twelve() {
    // 12^21 + 1728 - 441 + 252
    assert_eq!(evaluate(12), "46005119909369701467651");
}

#[test]
fn test_evaluate_small() {
    // 2^2 + 8 - 4 + 4
    assert_eq!(evaluate(2), "12");
    // 1^1 + 1 - 1 + 1
    assert_eq!(evaluate(1), "2");
    // 10^1 + 1000 - 1 + 10
    assert_eq!(evaluate(10), "1019");
}

#[test]
fn test_evaluate_square_exceeds_cube() {
    // 19^3 < 91^2, the polynomial part is still 307
    let expected = "232582849345724962061808152564655542758970670101721869455380995292050708596028544827179076934311238442854429336644126";
    assert_eq!(evaluate(19), expected);
}

#[test]
fn test_evaluation_display() {
    let eval = Evaluation::new(12);
    assert_eq!(eval.reverse, 21);
    assert_eq!(
        eval.to_string(),
        " Result: 12^21 + 12^3 - 21^2 + (12*21) is 46005119909369701467651"
    );
}
