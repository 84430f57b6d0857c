//! Sum of all natural numbers below a limit that are multiples of 3 or 5.

use crate::traits::Drill;

#[inline]
fn is_multiple_of_3_or_5(k: u64) -> bool {
    k % 3 == 0 || k % 5 == 0
}

/// Sum every `k` in `[0, limit)` divisible by 3 or 5, one candidate at a time.
///
/// ```
/// assert_eq!(leet_drills::problems::multiples::sum_of_multiples(10), 23);
/// ```
pub fn sum_of_multiples(limit: u64) -> u64 {
    (0..limit)
        .filter(|&k| is_multiple_of_3_or_5(k))
        .fold(0, |acc, k| acc + k)
}

/// Same sum by inclusion-exclusion: S(3) + S(5) - S(15).
///
/// Intermediate products are taken in `u128`, so every limit whose sum fits
/// in a `u64` is exact. Larger sums saturate at `u64::MAX`.
pub fn sum_of_multiples_closed_form(limit: u64) -> u64 {
    // Sum of the positive multiples of `d` strictly below `limit`.
    let series = |d: u64| {
        let n = u128::from(limit.saturating_sub(1) / d);
        u128::from(d) * n * (n + 1) / 2
    };
    let total = series(3) + series(5) - series(15);
    u64::try_from(total).unwrap_or(u64::MAX)
}

#[derive(Clone, Debug)]
pub struct MultiplesSum {
    pub limit: u64,
}

impl MultiplesSum {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Drill for MultiplesSum {
    type Output = u64;

    fn name(&self) -> &'static str {
        "sum_of_multiples"
    }

    fn input_size(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(usize::MAX)
    }

    fn solve(self) -> u64 {
        sum_of_multiples(self.limit)
    }
}
