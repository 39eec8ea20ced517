// src/integer_math/sequences.rs
//
// Fibonacci numbers and factorials.
//
// Both come in two flavours. `fibonacci` and `factorial` wrap silently once
// the value outgrows its type (fib(47) for i32, 21! for i64); the `checked_`
// variants report `Overflow` at that point instead.

use crate::error::{require_non_negative, NumUtilError, Result};

/// The nth Fibonacci number, with fib(0) = 0 and fib(1) = 1.
///
/// # Examples
/// ```
/// use numutil::integer_math::sequences::fibonacci;
///
/// assert_eq!(fibonacci(10).unwrap(), 55);
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i32) -> Result<i32> {
    fibonacci_by("fibonacci", n, |a, b| Some(a.wrapping_add(b)))
}

/// Like [`fibonacci`], but reports `Overflow` past fib(46).
pub fn checked_fibonacci(n: i32) -> Result<i32> {
    fibonacci_by("checked_fibonacci", n, i32::checked_add)
}

/// n! as a 64-bit integer, with 0! = 1! = 1.
///
/// # Examples
/// ```
/// use numutil::integer_math::sequences::factorial;
///
/// assert_eq!(factorial(6).unwrap(), 720);
/// ```
pub fn factorial(n: i32) -> Result<i64> {
    factorial_by("factorial", n, |a, b| Some(a.wrapping_mul(b)))
}

/// Like [`factorial`], but reports `Overflow` past 20!.
pub fn checked_factorial(n: i32) -> Result<i64> {
    factorial_by("checked_factorial", n, i64::checked_mul)
}

fn fibonacci_by(
    operation: &'static str,
    n: i32,
    add: impl Fn(i32, i32) -> Option<i32>,
) -> Result<i32> {
    require_non_negative(operation, n)?;
    if n == 0 {
        return Ok(0);
    }

    let (mut previous, mut current) = (0, 1);
    for _ in 1..n {
        let next = add(previous, current)
            .ok_or(NumUtilError::Overflow { operation, value: n as i64 })?;
        previous = current;
        current = next;
    }
    Ok(current)
}

fn factorial_by(
    operation: &'static str,
    n: i32,
    multiply: impl Fn(i64, i64) -> Option<i64>,
) -> Result<i64> {
    require_non_negative(operation, n)?;

    let mut result: i64 = 1;
    for i in 2..=n as i64 {
        result = multiply(result, i)
            .ok_or(NumUtilError::Overflow { operation, value: n as i64 })?;
    }
    Ok(result)
}
