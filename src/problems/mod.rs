//! Drill implementations.
//!
//! Each module exposes the solution as a plain function plus a small struct
//! implementing [`Drill`](crate::traits::Drill) for use with the runner:
//! - [`merge_lists`]       : merge two sorted linked lists by relinking nodes.
//! - [`multiples`]         : sum of multiples of 3 or 5 below a limit.
//! - [`prime_factor`]      : largest prime factor by trial division.
//! - [`two_sum`]           : pair of indices summing to a target.
//! - [`parentheses`]       : bracket matching with a stack.
//! - [`stock_profit`]      : best single buy/sell trade.
//! - [`anagram`]           : same multiset of characters.
//! - [`flood_fill`]        : recolour a 4-connected region.
//! - [`max_fish`]          : richest 4-connected region of a grid.
//! - [`longest_substring`] : longest run without a repeated character.
//! - [`first_unique`]      : first character occurring exactly once.
//! - [`reorder_logs`]      : letter-logs sorted, digit-logs kept in order.

pub mod anagram;
pub mod first_unique;
pub mod flood_fill;
pub mod longest_substring;
pub mod max_fish;
pub mod merge_lists;
pub mod multiples;
pub mod parentheses;
pub mod prime_factor;
pub mod reorder_logs;
pub mod stock_profit;
pub mod two_sum;
