pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

pub const RADIX: u32 = 10;

pub const ZERO_STR: &str = "0";

pub const ONE_STR: &str = "1";

/// Largest value served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;
