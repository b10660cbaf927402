//! # Arith
//! Schoolbook arithmetic over decimal digit strings, most significant digit first.
//!
//! Operands must consist of ASCII digits. An empty operand counts as zero. Every result is
//! canonical: no leading zeros, `"0"` for zero, never empty.

use crate::big_dec_constants::*;
use crate::reverse::reverse_digits;

macro_rules! digit_value {
    ($c: expr) => {
        ($c - b'0') as u32
    };
}

macro_rules! new_zero_vec {
    ($len: expr) => {
        vec![0u32; $len]
    };
}

macro_rules! skip_leading_zero {
    ($vec: expr) => {
        {
            let digits: String = $vec
                .into_iter()
                .skip_while(|d| *d == 0)
                .map(|d| DIGITS[d as usize])
                .collect();
            if digits.is_empty() {
                String::from(ZERO_STR)
            } else {
                digits
            }
        }
    };
}

/// Multiplies two decimal digit strings.
/// ```
/// use big_dec::multiply;
///
/// assert_eq!(multiply("10", "2"), "20");
/// assert_eq!(multiply("10", ""), "0");
/// ```
pub fn multiply(x: &str, y: &str) -> String {
    let x = x.as_bytes();
    let y = y.as_bytes();
    let x_len = x.len();
    let y_len = y.len();

    if x_len == 0 || y_len == 0 {
        return String::from(ZERO_STR);
    }
    if x == ZERO_STR.as_bytes() || y == ZERO_STR.as_bytes() {
        return String::from(ZERO_STR);
    }

    // digit i of x times digit j of y lands on position i + j + 1,
    // position 0 only ever receives carries
    let mut result = new_zero_vec!(x_len + y_len);
    for i in 0..x_len {
        let x_val = digit_value!(x[i]);
        for j in 0..y_len {
            result[i + j + 1] += x_val * digit_value!(y[j]);
        }
    }

    // must run from the least significant end so cascading carries settle in one pass
    for i in (1..x_len + y_len).rev() {
        if result[i] >= RADIX {
            result[i - 1] += result[i] / RADIX;
            result[i] %= RADIX;
        }
    }

    skip_leading_zero!(result)
}

/// Adds two decimal digit strings.
/// ```
/// use big_dec::add;
///
/// assert_eq!(add("10", "200"), "210");
/// assert_eq!(add("", "10"), "10");
/// ```
pub fn add<'a>(mut x: &'a str, mut y: &'a str) -> String {
    if y.len() < x.len() {
        std::mem::swap(&mut x, &mut y);
    }

    // least significant digit first, so both operands line up at index 0
    let x_rev = reverse_digits(x);
    let y_rev = reverse_digits(y);
    let x_rev = x_rev.as_bytes();
    let y_rev = y_rev.as_bytes();

    let mut result: Vec<u32> = Vec::with_capacity(y_rev.len() + 1);
    let mut carry: u32 = 0;

    for i in 0..x_rev.len() {
        let sum = digit_value!(x_rev[i]) + digit_value!(y_rev[i]) + carry;
        result.push(sum % RADIX);
        carry = sum / RADIX;
    }

    for i in x_rev.len()..y_rev.len() {
        let sum = digit_value!(y_rev[i]) + carry;
        result.push(sum % RADIX);
        carry = sum / RADIX;
    }

    if carry != 0 {
        result.push(carry);
    }

    result.reverse();
    skip_leading_zero!(result)
}

/// Raises `base` to `exp` by repeated multiplication. `exp == 0` gives `"1"`.
pub fn pow(base: &str, exp: u32) -> String {
    let mut acc = String::from(ONE_STR);
    for _ in 0..exp {
        acc = multiply(base, &acc);
    }
    acc
}

#[cfg(test)]
const OPERANDS: [&str; 10] = [
    "", "0", "1", "2", "9", "10", "200", "999",
    "123456789012345678901234567890",
    "987654321098765432109876543210",
];

#[cfg(test)]
fn is_canonical(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit()) && (s == ZERO_STR || !s.starts_with('0'))
}

#[test]
fn test_multiply() {
    assert_eq!(multiply("10", "2"), "20");
    assert_eq!(multiply("2", "10"), "20");
    assert_eq!(multiply("10", "0"), "0");
    assert_eq!(multiply("10", ""), "0");
    assert_eq!(multiply("", ""), "0");
    assert_eq!(multiply("999", "999"), "998001");
    assert_eq!(multiply("99999", "1"), "99999");

    let a = "123456789012345678901234567890";
    let b = "987654321098765432109876543210";
    let c = "121932631137021795226185032733622923332237463801111263526900";
    assert_eq!(multiply(a, b), c);
}

#[test]
fn test_multiply_zero_operand() {
    for a in OPERANDS {
        assert_eq!(multiply(a, "0"), "0", "{:?} * 0", a);
        assert_eq!(multiply(a, ""), "0", "{:?} * ''", a);
    }
    // zero spelled with extra digits still collapses to a single "0"
    assert_eq!(multiply("000", "5"), "0");
}

#[test]
fn test_multiply_commutes() {
    for a in OPERANDS {
        for b in OPERANDS {
            assert_eq!(multiply(a, b), multiply(b, a), "{:?} * {:?}", a, b);
        }
    }
}

#[test]
fn test_add() {
    assert_eq!(add("10", "200"), "210");
    assert_eq!(add("200", "10"), "210");
    assert_eq!(add("0", "10"), "10");
    assert_eq!(add("", "10"), "10");
    assert_eq!(add("", ""), "0");
    assert_eq!(add("0", "0"), "0");
    assert_eq!(add("99999999999999999999", "1"), "100000000000000000000");
    assert_eq!(add("123456789123456789", "987654321987654321"), "1111111111111111110");
}

#[test]
fn test_add_identity() {
    for a in OPERANDS {
        let canonical = add(a, "");
        assert_eq!(add(a, "0"), canonical, "{:?} + 0", a);
        assert_eq!(add("", a), add("0", a), "'' + {:?}", a);
    }
    assert_eq!(add("0", "007"), "7");
    assert_eq!(add("", "0"), "0");
}

#[test]
fn test_add_longer_operand_first() {
    let short = String::from("5");
    let long = String::from("99995");
    // operands with distinct lifetimes, the longer one on the left
    assert_eq!(add(&long, &short), "100000");
    assert_eq!(add(&short, &long), "100000");
    assert_eq!(add("000", "0000"), "0");
    assert_eq!(add("0000", "05"), "5");
    assert_eq!(multiply("05", "2"), "10");
}

#[test]
fn test_add_commutes() {
    for a in OPERANDS {
        for b in OPERANDS {
            assert_eq!(add(a, b), add(b, a), "{:?} + {:?}", a, b);
        }
    }
}

#[test]
fn test_results_are_canonical() {
    for a in OPERANDS {
        for b in OPERANDS {
            let sum = add(a, b);
            let product = multiply(a, b);
            assert!(is_canonical(&sum), "{:?} + {:?} = {:?}", a, b, sum);
            assert!(is_canonical(&product), "{:?} * {:?} = {:?}", a, b, product);
        }
    }
}

#[test]
fn test_pow() {
    assert_eq!(pow("12", 0), "1");
    assert_eq!(pow("0", 0), "1");
    assert_eq!(pow("0", 5), "0");
    assert_eq!(pow("12", 21), "46005119909369701466112");
    assert_eq!(pow("2", 100), "1267650600228229401496703205376");
}
