// src/integer_math/gcd.rs

use log::trace;

use crate::error::{NumUtilError, Result};

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// The result is never negative: Euclid runs on the magnitudes of `x` and `y`,
/// which is what the signed run produces up to sign since `%` truncates
/// toward zero. `gcd(x, 0) == |x|` and `gcd(0, 0) == 0`.
///
/// The one result `i32` cannot hold is 2^31, from `gcd(i32::MIN, 0)` or
/// `gcd(i32::MIN, i32::MIN)`; it wraps to `i32::MIN`.
pub fn gcd(x: i32, y: i32) -> i32 {
    euclid(x.unsigned_abs(), y.unsigned_abs()) as i32
}

/// Least common multiple, `|x * y| / gcd(x, y)`.
///
/// The product is formed in 64 bits. `lcm(0, 0)` has a zero GCD and reports
/// `DivisionByZero`; a multiple beyond `i32::MAX` reports `Overflow`.
///
/// # Examples
/// ```
/// use numutil::integer_math::gcd::lcm;
///
/// assert_eq!(lcm(8, 12).unwrap(), 24);
/// assert_eq!(lcm(-4, 6).unwrap(), 12);
/// assert!(lcm(0, 0).is_err());
/// ```
pub fn lcm(x: i32, y: i32) -> Result<i32> {
    let divisor = euclid(x.unsigned_abs(), y.unsigned_abs());
    if divisor == 0 {
        return Err(NumUtilError::DivisionByZero { operation: "lcm" });
    }

    let product = x.unsigned_abs() as u64 * y.unsigned_abs() as u64;
    let multiple = product / divisor as u64;
    trace!("lcm({}, {}) = {} / {} = {}", x, y, product, divisor, multiple);

    i32::try_from(multiple).map_err(|_| NumUtilError::Overflow {
        operation: "lcm",
        value: multiple as i64,
    })
}

fn euclid(mut x: u32, mut y: u32) -> u32 {
    while y != 0 {
        let remainder = x % y;
        x = y;
        y = remainder;
    }
    x
}
