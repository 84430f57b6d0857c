//! Best single buy-then-sell trade.

use crate::traits::Drill;

/// Maximum profit from buying once and selling once later, 0 if no trade gains.
///
/// Two pointers: `buy` marks the cheapest day seen so far in the current run
/// and jumps forward to `sell` whenever the price fails to rise above it.
///
/// ```
/// use leet_drills::problems::stock_profit::max_profit;
///
/// assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
/// ```
pub fn max_profit(prices: &[u32]) -> u32 {
    let mut best = 0;
    let mut buy = 0;
    for sell in 1..prices.len() {
        if prices[sell] > prices[buy] {
            best = best.max(prices[sell] - prices[buy]);
        } else {
            buy = sell;
        }
    }
    best
}

#[derive(Clone, Debug)]
pub struct MaxProfit {
    pub prices: Vec<u32>,
}

impl MaxProfit {
    pub fn new(prices: Vec<u32>) -> Self {
        Self { prices }
    }
}

impl Drill for MaxProfit {
    type Output = u32;

    fn name(&self) -> &'static str {
        "max_profit"
    }

    fn input_size(&self) -> usize {
        self.prices.len()
    }

    fn solve(self) -> u32 {
        max_profit(&self.prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_example() {
        assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
    }

    #[test]
    fn decreasing_prices_yield_zero() {
        assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
        assert_eq!(max_profit(&[5, 5, 5]), 0);
    }

    #[test]
    fn short_inputs() {
        assert_eq!(max_profit(&[]), 0);
        assert_eq!(max_profit(&[3]), 0);
        assert_eq!(max_profit(&[1, 2]), 1);
    }

    #[test]
    fn later_low_beats_earlier_run() {
        assert_eq!(max_profit(&[3, 8, 1, 9]), 8);
        assert_eq!(max_profit(&[2, 4, 1]), 2);
    }

    #[test]
    fn extreme_prices() {
        assert_eq!(max_profit(&[0, u32::MAX]), u32::MAX);
    }
}
