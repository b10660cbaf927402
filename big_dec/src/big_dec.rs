//! # BigDec
//! Immutable arbitrary-precision non-negative decimal integers, stored as canonical digit strings.
//! # Example
//! ```
//! use big_dec::BigDec;
//!
//! let a: BigDec = "10000000000000".parse().unwrap();
//! let b: BigDec = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a * b = {}", &a * &b);
//! println!("a ^ 3 = {}", a.pow(3));
//! ```

use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Mul, MulAssign,
};
use std::cmp::{Ord, PartialOrd, Ordering};
use std::str::FromStr;

use thiserror::Error;

use crate::arith;
use crate::big_dec_cache::*;
use crate::big_dec_constants::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBigDecError {
    #[error("invalid digit {found:?} at position {index}")]
    InvalidDigit { found: char, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDec {
    digits: String,
}

// 构造
impl BigDec {
    /// `digits` must already be canonical.
    pub(crate) fn from_digit_string(digits: String) -> Self {
        debug_assert!(!digits.is_empty());
        BigDec { digits }
    }
    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }
    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }
}

// 访问
impl BigDec {
    pub fn as_str(&self) -> &str {
        &self.digits
    }
    pub fn is_zero(&self) -> bool {
        self.digits == ZERO_STR
    }
    /// Number of decimal digits, `1` for zero.
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn into_string(self) -> String {
        self.digits
    }
    pub fn pow(&self, exp: u32) -> BigDec {
        BigDec::from_digit_string(arith::pow(&self.digits, exp))
    }
}

impl Display for BigDec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

// 解析
impl FromStr for BigDec {
    type Err = ParseBigDecError;

    /// Accepts ASCII digits only. Leading zeros are dropped and the empty string is zero.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if let Some((index, found)) = val.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigDecError::InvalidDigit { found, index });
        }
        let digits = val.trim_start_matches('0');
        if digits.is_empty() {
            Ok(BigDec::zero())
        } else {
            Ok(BigDec::from_digit_string(digits.to_string()))
        }
    }
}

macro_rules! impl_unsigned_to_big_dec {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigDec {
        fn from(val: $u) -> Self {
            BigDec::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_dec!(u8, u16, u32, usize, u64);

impl BigDec {
    fn value_of(val: u64) -> BigDec {
        if val <= MAX_CONSTANT as u64 {
            POS_CACHE[val as usize].clone()
        } else {
            BigDec::from_digit_string(val.to_string())
        }
    }
}

// 比较
impl PartialEq<&str> for BigDec {
    fn eq(&self, other: &&str) -> bool {
        self.digits == *other
    }
}

impl PartialOrd for BigDec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDec {
    // canonical form means a longer string is always the larger value
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

// 加法
impl Add for BigDec {
    type Output = BigDec;

    fn add(self, val: Self) -> Self::Output {
        &self + &val
    }
}

impl Add for &BigDec {
    type Output = BigDec;

    fn add(self, rhs: Self) -> Self::Output {
        BigDec::from_digit_string(arith::add(&self.digits, &rhs.digits))
    }
}

impl AddAssign for BigDec {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl AddAssign<&BigDec> for BigDec {
    fn add_assign(&mut self, rhs: &BigDec) {
        *self = &*self + rhs;
    }
}

// 乘法
impl Mul for BigDec {
    type Output = BigDec;

    fn mul(self, val: Self) -> Self::Output {
        &self * &val
    }
}

impl Mul<&BigDec> for &BigDec {
    type Output = BigDec;

    fn mul(self, rhs: &BigDec) -> Self::Output {
        BigDec::from_digit_string(arith::multiply(&self.digits, &rhs.digits))
    }
}

impl MulAssign for BigDec {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&BigDec> for BigDec {
    fn mul_assign(&mut self, rhs: &BigDec) {
        *self = &*self * rhs;
    }
}

#[test]
fn test_from_str() {
    let a: BigDec = "120".parse().unwrap();
    assert_eq!(a, "120");
    let a: BigDec = "000120".parse().unwrap();
    assert_eq!(a, "120");
    let a: BigDec = "".parse().unwrap();
    assert!(a.is_zero());
    let a: BigDec = "0000".parse().unwrap();
    assert_eq!(a, "0");

    let err = "12a4".parse::<BigDec>().unwrap_err();
    assert_eq!(err, ParseBigDecError::InvalidDigit { found: 'a', index: 2 });
    assert!("-2".parse::<BigDec>().is_err());
    assert!(" 1".parse::<BigDec>().is_err());
}

#[test]
fn test_from_unsigned() {
    assert_eq!(BigDec::from(0u32), "0");
    assert_eq!(BigDec::from(16u8), "16");
    assert_eq!(BigDec::from(17u16), "17");
    assert_eq!(BigDec::from(99999usize), "99999");
    assert_eq!(BigDec::from(u64::MAX), "18446744073709551615");
}

#[test]
fn test_ops() {
    let a = BigDec::from(10u32);
    let b = BigDec::from(200u32);
    assert_eq!(&a + &b, "210");
    assert_eq!(&a * &b, "2000");
    assert_eq!(a.clone() * BigDec::zero(), "0");

    let mut acc = BigDec::one();
    for _ in 0..21 {
        acc *= BigDec::from(12u32);
    }
    assert_eq!(acc, "46005119909369701466112");
    acc += BigDec::from(1539u32);
    assert_eq!(acc, "46005119909369701467651");
    assert_eq!(BigDec::from(12u32).pow(21), "46005119909369701466112");
}

#[test]
fn test_cmp() {
    let small = BigDec::from(999u32);
    let big = BigDec::from(1000u32);
    assert!(small < big);
    assert!(BigDec::zero() < BigDec::one());
    assert_eq!(big.cmp(&BigDec::from(1000u64)), Ordering::Equal);
    assert_eq!(big.len(), 4);
}
