//! Core trait shared by every drill.
//!
//! A drill is a *fixed* problem instance: a struct that owns (or borrows) the
//! input of one exercise, such as a price series, a grid, or two linked lists.
//! Implementing [`Drill`] lets the generic [`DrillRunner`](crate::runner::DrillRunner)
//! time it, trace it and hand the answer back without knowing anything about
//! the algorithm inside.
//!
//! Every solution in [`crate::problems`] is first of all a plain function; the
//! trait impl is a thin adapter that stores the arguments and forwards to it.

use std::fmt::Debug;

/// A single, self-contained exercise instance.
///
/// Semantics:
/// - `solve` consumes the instance. Drills whose inputs are relinked or
///   mutated in place (lists, grids) move those inputs into the solution, so
///   nothing can observe them afterwards.
/// - `solve` must be pure with respect to everything outside the instance:
///   solving two clones of the same drill yields equal outputs.
/// - `input_size` is a rough measure of work (elements, cells, the numeric
///   limit) used to pick a repeat count.
pub trait Drill {
    /// Answer produced by the drill.
    type Output: Clone + PartialEq + Debug;

    /// Stable, snake_case identifier used in reports and trace spans.
    fn name(&self) -> &'static str;

    /// Approximate size of the instance.
    fn input_size(&self) -> usize;

    /// Solve the instance.
    fn solve(self) -> Self::Output;
}
