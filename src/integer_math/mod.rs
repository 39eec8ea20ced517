// src/integer_math/mod.rs

pub mod digits;
pub mod divisors;
pub mod gcd;
pub mod primes;
pub mod sequences;

pub use digits::{checked_reverse_digits, digit_count, digit_sum, is_armstrong, reverse_digits};
pub use divisors::{is_perfect, proper_divisor_sum};
pub use gcd::{gcd, lcm};
pub use primes::{is_prime, next_prime};
pub use sequences::{checked_factorial, checked_fibonacci, factorial, fibonacci};
