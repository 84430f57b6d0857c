use crate::utils::default_repeats;
use crate::{Drill, DrillRunner};

/// Configures a [`DrillRunner`] beyond what its constructors take.
///
/// Besides the repeat count it sets a number of untimed warm-up solves, which
/// let allocator and cache state settle before the first measured repeat.
pub struct DrillRunnerBuilder<D: Drill> {
    drill: D,
    repeats: Option<usize>,
    warmup: usize,
}

impl<D: Drill> DrillRunnerBuilder<D> {
    pub fn new(drill: D) -> Self {
        Self {
            drill,
            repeats: None,
            warmup: 0,
        }
    }
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = Some(repeats);
        self
    }
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }
    pub fn build(self) -> DrillRunner<D> {
        let repeats = self
            .repeats
            .unwrap_or_else(|| default_repeats(self.drill.input_size()));
        let mut runner = DrillRunner::with_repeats(self.drill, repeats);
        runner.warmup = self.warmup;
        runner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::two_sum::TwoSum;

    #[test]
    fn warmup_is_carried_to_runner() {
        let runner = DrillRunnerBuilder::new(TwoSum::new(vec![3, 2, 4], 6))
            .with_warmup(3)
            .with_repeats(2)
            .build();
        assert_eq!(runner.warmup(), 3);
        assert_eq!(runner.repeats(), 2);
        assert_eq!(runner.run().output, Some((1, 2)));
    }
}
