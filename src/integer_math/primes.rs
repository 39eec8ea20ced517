// src/integer_math/primes.rs
//
// Primality by trial division and the successor search built on it.
// Complexity: O(sqrt(n)) per candidate

use num::integer::Roots;
use num::Integer;
use log::{debug, trace};

use crate::error::{NumUtilError, Result};

/// Returns true if `n` is prime.
///
/// Anything below 2 is not prime. Otherwise every integer from 2 up to and
/// including floor(sqrt(n)) is tried as a divisor.
///
/// # Examples
/// ```
/// use numutil::integer_math::primes::is_prime;
///
/// assert!(is_prime(13));
/// assert!(!is_prime(9));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i32) -> bool {
    if n < 2 {
        return false;
    }

    let bound = n.sqrt();
    let mut divisor = 2;
    while divisor <= bound {
        if n.is_multiple_of(&divisor) {
            trace!("{} is divisible by {}", n, divisor);
            return false;
        }
        divisor += 1;
    }

    true
}

/// Returns the smallest prime strictly greater than `n`.
///
/// The search is unbounded apart from the `i32` range: there is no prime
/// above `i32::MAX` to return, so that input reports `Overflow`.
///
/// # Examples
/// ```
/// use numutil::integer_math::primes::next_prime;
///
/// assert_eq!(next_prime(17).unwrap(), 19);
/// assert_eq!(next_prime(1).unwrap(), 2);
/// ```
pub fn next_prime(n: i32) -> Result<i32> {
    let overflow = || NumUtilError::Overflow { operation: "next_prime", value: n as i64 };

    // Nothing below 2 is prime, so skip straight to the first candidate that can be
    let mut candidate = n.checked_add(1).ok_or_else(overflow)?.max(2);
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1).ok_or_else(overflow)?;
    }

    debug!("Next prime after {} is {}", n, candidate);
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        for p in [2, 3, 5, 7, 11, 13] {
            assert!(is_prime(p), "{} should be prime", p);
        }
        for c in [4, 6, 8, 9, 10, 12] {
            assert!(!is_prime(c), "{} should be composite", c);
        }
    }

    #[test]
    fn test_is_prime_below_two() {
        for n in [i32::MIN, -13, -2, -1, 0, 1] {
            assert!(!is_prime(n));
        }
    }

    #[test]
    fn test_is_prime_perfect_square_of_prime() {
        // The bound is inclusive, otherwise p * p would slip through
        assert!(!is_prime(49));
        assert!(!is_prime(169));
        assert!(!is_prime(46_337 * 46_337));
    }

    #[test]
    fn test_is_prime_largest_i32() {
        assert!(is_prime(i32::MAX)); // 2^31 - 1 is a Mersenne prime
        assert!(!is_prime(i32::MAX - 1));
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(17), Ok(19));
        assert_eq!(next_prime(13), Ok(17));
        assert_eq!(next_prime(1), Ok(2));
        assert_eq!(next_prime(2), Ok(3));
        assert_eq!(next_prime(89), Ok(97));
    }

    #[test]
    fn test_next_prime_negative_start() {
        assert_eq!(next_prime(-100), Ok(2));
        assert_eq!(next_prime(i32::MIN), Ok(2));
    }

    #[test]
    fn test_next_prime_top_of_range() {
        assert_eq!(next_prime(2_147_483_629), Ok(i32::MAX));
        assert_eq!(
            next_prime(i32::MAX),
            Err(NumUtilError::Overflow { operation: "next_prime", value: i32::MAX as i64 })
        );
    }
}
