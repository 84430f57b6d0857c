//! Two-sum: indices of the pair adding up to a target.

use std::collections::HashMap;

use crate::traits::Drill;

/// Find `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
///
/// One pass over a `value -> index` map: for each element, look up the
/// complement among the elements already seen. Callers are expected to pass
/// inputs with exactly one such pair; `None` is returned when there is none.
///
/// ```
/// use leet_drills::problems::two_sum::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// ```
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &num) in nums.iter().enumerate() {
        let complement = i64::from(target) - i64::from(num);
        if let Some(&i) = seen.get(&complement) {
            return Some((i, j));
        }
        seen.insert(i64::from(num), j);
    }
    None
}

#[derive(Clone, Debug)]
pub struct TwoSum {
    pub nums: Vec<i32>,
    pub target: i32,
}

impl TwoSum {
    pub fn new(nums: Vec<i32>, target: i32) -> Self {
        Self { nums, target }
    }
}

impl Drill for TwoSum {
    type Output = Option<(usize, usize)>;

    fn name(&self) -> &'static str {
        "two_sum"
    }

    fn input_size(&self) -> usize {
        self.nums.len()
    }

    fn solve(self) -> Self::Output {
        two_sum(&self.nums, self.target)
    }
}
