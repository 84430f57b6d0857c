//! Largest prime factor by trial division.

use crate::traits::Drill;

/// Largest prime dividing `n`.
///
/// Factors of two are stripped first, then odd divisors up to `sqrt(n)`.
/// Whatever is left above 2 afterwards is a prime larger than every divisor
/// tried. `n` must be at least 2; `n == 1` returns 1.
///
/// ```
/// use leet_drills::problems::prime_factor::largest_prime_factor;
///
/// assert_eq!(largest_prime_factor(13195), 29);
/// ```
pub fn largest_prime_factor(mut n: u64) -> u64 {
    debug_assert!(n >= 2, "largest_prime_factor needs n >= 2, got {n}");
    let mut largest = 1;

    while n > 0 && n % 2 == 0 {
        largest = 2;
        n /= 2;
    }

    let mut factor = 3u64;
    // `factor <= n / factor` is `factor * factor <= n` without overflow.
    while factor <= n / factor {
        while n % factor == 0 {
            largest = factor;
            n /= factor;
        }
        factor += 2;
    }

    if n > 2 {
        largest = n;
    }
    largest
}

#[derive(Clone, Debug)]
pub struct LargestPrimeFactor {
    pub n: u64,
}

impl LargestPrimeFactor {
    pub fn new(n: u64) -> Self {
        Self { n }
    }
}

impl Drill for LargestPrimeFactor {
    type Output = u64;

    fn name(&self) -> &'static str {
        "largest_prime_factor"
    }

    fn input_size(&self) -> usize {
        // Trial division runs up to sqrt(n).
        (self.n as f64).sqrt().ceil() as usize
    }

    fn solve(self) -> u64 {
        largest_prime_factor(self.n)
    }
}
