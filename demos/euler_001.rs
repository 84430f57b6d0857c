//! Example: Project Euler 1, multiples of 3 or 5.
//!
//! Run with:
//! `cargo run --example euler_001`

use leet_drills::problems::multiples::sum_of_multiples;

fn main() {
    const LIMIT: u64 = 1000;
    println!("Sum of multiples of 3 or 5 below {LIMIT}: {}", sum_of_multiples(LIMIT));
}
