//! # Reverse
//! Digit-order reversal, both over a digit string and over a fixed-width integer.

use crate::big_dec_constants::RADIX;

/// Reverses a sequence of characters. The output has the same length and characters as the input.
/// ```
/// use big_dec::reverse_digits;
///
/// assert_eq!(reverse_digits("987"), "789");
/// assert_eq!(reverse_digits(""), "");
/// ```
pub fn reverse_digits(digits: &str) -> String {
    digits.chars().rev().collect()
}

/// Reverses the decimal digits of `val`.
///
/// Zeros at the end of `val` would become leading zeros of the reversed number, so they vanish:
/// `120` reverses to `21`, not `021`. A reversal that does not fit in `u32` wraps around.
pub fn reverse_integer(mut val: u32) -> u32 {
    let mut reversed: u32 = 0;
    while val != 0 {
        reversed = reversed.wrapping_add(val % RADIX);
        val /= RADIX;
        // no multiply after the last digit, otherwise a trailing 0 sneaks in
        if val != 0 {
            reversed = reversed.wrapping_mul(RADIX);
        }
    }
    reversed
}

#[test]
fn test_reverse_digits() {
    assert_eq!(reverse_digits("987"), "789");
    assert_eq!(reverse_digits(""), "");
    assert_eq!(reverse_digits("5"), "5");
    assert_eq!(reverse_digits("1200"), "0021");
}

#[test]
fn test_reverse_digits_involution() {
    for s in ["", "0", "7", "10", "987", "00120", "31415926535897932384626433"] {
        let twice = reverse_digits(&reverse_digits(s));
        assert_eq!(twice, s, "reverse twice of {:?} = {:?}", s, twice);
    }
}

#[test]
fn test_reverse_integer() {
    assert_eq!(reverse_integer(12345), 54321);
    assert_eq!(reverse_integer(0), 0);
    assert_eq!(reverse_integer(120), 21);
    assert_eq!(reverse_integer(7), 7);
    assert_eq!(reverse_integer(10), 1);
    assert_eq!(reverse_integer(99999), 99999);
    assert_eq!(reverse_integer(10000), 1);
}
