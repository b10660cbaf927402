//! Big Dec \
//! This crate provides:
//! - [`multiply`], [`add`], [`pow`]: schoolbook arithmetic over non-negative decimal digit strings.
//! - [`reverse_digits`], [`reverse_integer`]: digit-order reversal of a string or of a `u32`.
//! - [`BigDec`]: Immutable arbitrary-precision non-negative decimal integers built on the above.

mod arith;
mod big_dec;
mod big_dec_cache;
mod big_dec_constants;
mod reverse;

pub use arith::{add, multiply, pow};
pub use big_dec::{BigDec, ParseBigDecError};
pub use reverse::{reverse_digits, reverse_integer};

#[cfg(test)]
mod tests {
    use crate::BigDec;

    #[test]
    fn it_works() {
        let a: BigDec = "10000000000000".parse().unwrap();
        let b: BigDec = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a * b = {}", &a * &b);
        assert_eq!(&a + &b, "10900000000000");
        assert_eq!(&a * &b, "9000000000000000000000000");
    }
}
