//! Example: Project Euler 3, largest prime factor.
//!
//! Run with:
//! `cargo run --example euler_003`

use leet_drills::problems::prime_factor::largest_prime_factor;

fn main() {
    const TEST_CASE: u64 = 600_851_475_143;
    println!("Largest prime factor: {}", largest_prime_factor(TEST_CASE));
}
