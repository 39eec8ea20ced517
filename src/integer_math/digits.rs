// src/integer_math/digits.rs
//
// Decimal digit manipulation: counting, summing, reversing and the
// Armstrong (narcissistic) number test.

use crate::error::{require_non_negative, NumUtilError, Result};

/// Number of decimal digits in |n|. Zero has one digit.
pub fn digit_count(n: i32) -> u32 {
    match n.unsigned_abs() {
        0 => 1,
        magnitude => magnitude.ilog10() + 1,
    }
}

/// Sum of the decimal digits of |n|.
///
/// # Examples
/// ```
/// use numutil::integer_math::digits::digit_sum;
///
/// assert_eq!(digit_sum(9876), 30);
/// assert_eq!(digit_sum(-9876), 30);
/// ```
pub fn digit_sum(n: i32) -> i32 {
    let mut remaining = n.unsigned_abs();
    let mut sum = 0;
    while remaining > 0 {
        sum += (remaining % 10) as i32;
        remaining /= 10;
    }
    sum
}

/// Reverses the decimal digits of `n`, keeping its sign.
///
/// Trailing zeros vanish (`1200 -> 21`). A reversal that leaves the `i32`
/// range wraps; use [`checked_reverse_digits`] to detect that.
///
/// # Examples
/// ```
/// use numutil::integer_math::digits::reverse_digits;
///
/// assert_eq!(reverse_digits(1234), 4321);
/// assert_eq!(reverse_digits(-123), -321);
/// ```
pub fn reverse_digits(n: i32) -> i32 {
    let mut remaining = n;
    let mut reversed: i32 = 0;
    while remaining != 0 {
        reversed = reversed.wrapping_mul(10).wrapping_add(remaining % 10);
        remaining /= 10;
    }
    reversed
}

/// Like [`reverse_digits`], but reports `Overflow` when the result does not fit.
pub fn checked_reverse_digits(n: i32) -> Result<i32> {
    let overflow = NumUtilError::Overflow { operation: "checked_reverse_digits", value: n as i64 };

    let mut remaining = n;
    let mut reversed: i32 = 0;
    while remaining != 0 {
        // remaining % 10 carries the sign of n, so the digits accumulate toward it
        reversed = reversed
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(remaining % 10))
            .ok_or_else(|| overflow.clone())?;
        remaining /= 10;
    }
    Ok(reversed)
}

/// True if `n` equals the sum of its digits each raised to the digit count.
///
/// Defined for n >= 0; negative input is `InvalidArgument`.
///
/// # Examples
/// ```
/// use numutil::integer_math::digits::is_armstrong;
///
/// assert!(is_armstrong(370).unwrap());
/// assert!(!is_armstrong(123).unwrap());
/// ```
pub fn is_armstrong(n: i32) -> Result<bool> {
    require_non_negative("is_armstrong", n)?;

    let exponent = digit_count(n);
    let mut remaining = n as u64;
    let mut sum: u64 = 0;
    while remaining > 0 {
        sum += (remaining % 10).pow(exponent);
        remaining /= 10;
    }
    Ok(sum == n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(7), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(-999), 3);
        assert_eq!(digit_count(i32::MAX), 10);
        assert_eq!(digit_count(i32::MIN), 10);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(9876), 30);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1_000_000), 1);
        assert_eq!(digit_sum(i32::MIN), 47); // 2147483648
    }

    #[test]
    fn test_reverse_digits() {
        assert_eq!(reverse_digits(1234), 4321);
        assert_eq!(reverse_digits(0), 0);
        assert_eq!(reverse_digits(7), 7);
        assert_eq!(reverse_digits(1200), 21);
        assert_eq!(reverse_digits(-1234), -4321);
    }

    #[test]
    fn test_reverse_digits_wraps() {
        // 9000000001 does not fit in i32
        assert_eq!(reverse_digits(1_000_000_009), 9_000_000_001i64 as i32);
    }

    #[test]
    fn test_checked_reverse_digits() {
        assert_eq!(checked_reverse_digits(1234), Ok(4321));
        assert_eq!(checked_reverse_digits(-1234), Ok(-4321));
        assert_eq!(checked_reverse_digits(1_463_847_412), Ok(2_147_483_641));
        assert_eq!(
            checked_reverse_digits(1_000_000_009),
            Err(NumUtilError::Overflow { operation: "checked_reverse_digits", value: 1_000_000_009 })
        );
        assert!(checked_reverse_digits(i32::MIN).is_err());
    }

    #[test]
    fn test_is_armstrong() {
        for n in [0, 1, 9, 153, 370, 371, 407, 1634, 8208, 9474] {
            assert_eq!(is_armstrong(n), Ok(true), "{} should be an Armstrong number", n);
        }
        for n in [10, 100, 123, 372, 9475] {
            assert_eq!(is_armstrong(n), Ok(false), "{} should not be an Armstrong number", n);
        }
    }

    #[test]
    fn test_is_armstrong_ten_digits() {
        assert_eq!(is_armstrong(i32::MAX), Ok(false));
    }

    #[test]
    fn test_is_armstrong_negative() {
        assert_eq!(
            is_armstrong(-153),
            Err(NumUtilError::InvalidArgument { operation: "is_armstrong", value: -153 })
        );
    }
}
