// src/integer_math/divisors.rs

use num::integer::Roots;
use num::Integer;

/// Sum of the proper divisors of `n` (every positive divisor except `n`).
///
/// Divisors are found in pairs (i, n / i) for i up to floor(sqrt(n)); a
/// square root is counted once. Returns 0 for n <= 1.
pub fn proper_divisor_sum(n: i32) -> i64 {
    if n <= 1 {
        return 0;
    }

    let mut sum: i64 = 1;
    for i in 2..=n.sqrt() {
        if n.is_multiple_of(&i) {
            sum += i as i64;
            let paired = n / i;
            if paired != i {
                sum += paired as i64;
            }
        }
    }
    sum
}

/// True if `n` equals the sum of its proper divisors. 1 is excluded.
///
/// # Examples
/// ```
/// use numutil::integer_math::divisors::is_perfect;
///
/// assert!(is_perfect(496));
/// assert!(!is_perfect(10));
/// ```
pub fn is_perfect(n: i32) -> bool {
    n > 1 && proper_divisor_sum(n) == n as i64
}
