// src/lib.rs

pub mod config;
pub mod demo;
pub mod error;
pub mod integer_math;

pub use error::{NumUtilError, Result};
pub use integer_math::{
    checked_factorial, checked_fibonacci, checked_reverse_digits, digit_sum, factorial, fibonacci,
    gcd, is_armstrong, is_perfect, is_prime, lcm, next_prime, reverse_digits,
};
