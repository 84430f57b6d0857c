//! Interview drills and numeric puzzles
//!
//! This crate collects small, independent exercise solutions: linked-list
//! merging, two-sum, bracket matching, flood fill, sliding-window substring
//! search, log reordering and a couple of Project Euler style puzzles.
//!
//! ## Core idea
//! 1. Every solution is a plain function over in-memory input; call it directly.
//! 2. Each one is also wrapped in a struct implementing [`Drill`], which holds
//!    a fixed instance of the exercise.
//! 3. [`DrillRunner`] solves a drill repeatedly and reports the answer together
//!    with wall-clock timings, which is what the `drill_probe` binary and the
//!    benchmarks build on.
//!
//! ## Quick start
//! ```
//! use leet_drills::{problems::two_sum::TwoSum, DrillRunner};
//!
//! let report = DrillRunner::new(TwoSum::new(vec![2, 7, 11, 15], 9)).run();
//! assert_eq!(report.output, Some((0, 1)));
//! assert!(report.repeats >= 1);
//! ```
//!
//! ## Built-in drills
//! See [`problems`] for the full list. Grid traversals use explicit stacks and
//! linked lists are consumed by value, so no drill recurses over its input.

pub mod builder;
pub mod problems;
pub mod runner;
pub mod traits;
pub mod utils;

pub use crate::builder::DrillRunnerBuilder;
pub use crate::runner::{DrillRunner, RunReport};
pub use crate::traits::Drill;
