use lazy_static::*;

use crate::BigDec;
use crate::big_dec_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigDec; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigDec::from_digit_string(i.to_string()));
}

#[test]
fn test_pos_cache() {
    assert_eq!(POS_CACHE[0], "0");
    assert_eq!(POS_CACHE[7], "7");
    assert_eq!(POS_CACHE[MAX_CONSTANT], "16");
    assert_eq!(POS_CACHE.len(), MAX_CONSTANT + 1);
}
