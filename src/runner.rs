//! Generic drill runner.
//!
//! The runner solves a [`Drill`] one or more times and reports the answer
//! together with wall-clock timings:
//! 1. Each repeat solves a fresh clone of the drill, so in-place drills
//!    (grids, lists) always start from the original input.
//! 2. Outputs of all repeats must agree; drills are pure.
//! 3. Optional warm-up solves run first and are left out of the timings.
//!
//! The runner is completely generic over implementations of [`Drill`].

use std::time::{Duration, Instant};

use crate::traits::Drill;
use crate::utils::default_repeats;

/// Runner for a given drill instance `D`.
///
/// Typical usage:
/// ```
/// use leet_drills::{problems::stock_profit::MaxProfit, DrillRunner};
///
/// let runner = DrillRunner::new(MaxProfit::new(vec![7, 1, 5, 3, 6, 4]));
/// let report = runner.run();
/// assert_eq!(report.output, 5);
/// println!("best of {}: {:?}", report.repeats, report.best);
/// ```
pub struct DrillRunner<D: Drill> {
    drill: D,
    repeats: usize,
    pub(crate) warmup: usize,
}

/// Outcome of [`DrillRunner::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<O> {
    /// Name of the drill that produced this report.
    pub name: &'static str,
    /// Answer of the last repeat (all repeats agree).
    pub output: O,
    /// Number of times the drill was solved.
    pub repeats: usize,
    /// Fastest single solve.
    pub best: Duration,
    /// Average over all repeats.
    pub mean: Duration,
    /// Sum over all repeats.
    pub total: Duration,
}

impl<D: Drill> DrillRunner<D> {
    /// Create a runner with a heuristic repeat count based on the input size.
    pub fn new(drill: D) -> Self {
        let repeats = default_repeats(drill.input_size());
        Self::with_repeats(drill, repeats)
    }

    /// Create a runner with an explicit repeat count.
    ///
    /// # Panics
    /// Panics if `repeats == 0`.
    pub fn with_repeats(drill: D, repeats: usize) -> Self {
        assert!(repeats > 0, "repeats must be positive");
        Self {
            drill,
            repeats,
            warmup: 0,
        }
    }

    /// Expose immutable reference to the underlying drill.
    pub fn drill(&self) -> &D {
        &self.drill
    }

    /// Return the configured repeat count.
    pub fn repeats(&self) -> usize {
        self.repeats
    }

    /// Untimed solves run before the timed repeats.
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Solve the drill exactly once, consuming the runner.
    ///
    /// Use this for drills that are not `Clone` or when timing is not needed.
    pub fn solve_once(self) -> D::Output {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("drill_solve_once", drill = self.drill.name());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.drill.solve()
    }
}

impl<D: Drill + Clone> DrillRunner<D> {
    /// Solve the drill `repeats` times and report the answer and timings.
    pub fn run(&self) -> RunReport<D::Output> {
        let name = self.drill.name();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("drill_run", drill = name, repeats = self.repeats);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        for _ in 0..self.warmup {
            let _ = self.drill.clone().solve();
        }

        let (mut output, first) = self.timed_solve();
        let mut best = first;
        let mut total = first;

        for _index in 1..self.repeats {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("drill_repeat", index = _index);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let (answer, elapsed) = self.timed_solve();
            best = best.min(elapsed);
            total += elapsed;
            debug_assert_eq!(output, answer, "drill `{name}` is not deterministic");
            output = answer;
        }

        let mean = total / u32::try_from(self.repeats).unwrap_or(u32::MAX);

        #[cfg(feature = "tracing")]
        tracing::debug!(drill = name, ?best, ?mean, "drill finished");

        RunReport {
            name,
            output,
            repeats: self.repeats,
            best,
            mean,
            total,
        }
    }

    /// Solve a fresh clone of the drill and time it.
    fn timed_solve(&self) -> (D::Output, Duration) {
        let instance = self.drill.clone();
        let started = Instant::now();
        let answer = instance.solve();
        (answer, started.elapsed())
    }
}
