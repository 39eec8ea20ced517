// src/demo.rs
//
// Demonstration run: every operation evaluated on a fixed sample input.

use std::fmt::{self, Display, Write};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::integer_math::{digits, divisors, gcd, primes, sequences};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    pub strict: bool,
    pub sections: Vec<DemoSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSection {
    pub title: String,
    pub entries: Vec<DemoEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoEntry {
    pub question: String,
    pub answer: String,
}

impl DemoSection {
    fn new(title: &str) -> Self {
        DemoSection { title: title.to_string(), entries: Vec::new() }
    }

    fn push<T: Display>(&mut self, question: &str, result: Result<T>) {
        let answer = match result {
            Ok(value) => value.to_string(),
            Err(e) => {
                warn!("{}: {}", question, e);
                format!("error: {}", e)
            }
        };
        self.entries.push(DemoEntry { question: question.to_string(), answer });
    }
}

/// Evaluates each operation on its sample input.
///
/// With `strict` set, the operations that can overflow use their checked
/// variants.
pub fn run(strict: bool) -> DemoReport {
    debug!("Running demo (strict = {})", strict);

    let fibonacci = if strict { sequences::checked_fibonacci } else { sequences::fibonacci };
    let factorial = if strict { sequences::checked_factorial } else { sequences::factorial };
    let reverse = |n| -> Result<i32> {
        if strict { digits::checked_reverse_digits(n) } else { Ok(digits::reverse_digits(n)) }
    };

    let mut primes_section = DemoSection::new("Primes and divisibility");
    primes_section.push("Is 13 a prime number?", Ok(primes::is_prime(13)));
    primes_section.push("GCD of 56 and 98:", Ok(gcd::gcd(56, 98)));
    primes_section.push("LCM of 8 and 12:", gcd::lcm(8, 12));
    primes_section.push("The 10th Fibonacci number:", fibonacci(10));
    primes_section.push("Factorial of 6:", factorial(6));

    let mut digits_section = DemoSection::new("Digits and divisors");
    digits_section.push("Is 496 a perfect number?", Ok(divisors::is_perfect(496)));
    digits_section.push("Sum of digits in 9876:", Ok(digits::digit_sum(9876)));
    digits_section.push("Reversed number of 1234:", reverse(1234));
    digits_section.push("Is 370 an Armstrong number?", digits::is_armstrong(370));
    digits_section.push("Next prime number after 17:", primes::next_prime(17));

    DemoReport { strict, sections: vec![primes_section, digits_section] }
}

impl DemoReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            writeln!(text, "{}:", section.title)?;
            for entry in &section.entries {
                writeln!(text, "{} {}", entry.question, entry.answer)?;
            }
        }
        f.write_str(&text)
    }
}
