//! First non-repeating character.

use std::collections::HashMap;

use crate::traits::Drill;

/// Char index of the first character that occurs exactly once in `s`.
///
/// Returns `None` (the `-1` of the classic formulation) when every character repeats.
///
/// ```
/// use leet_drills::problems::first_unique::first_uniq_char;
///
/// assert_eq!(first_uniq_char("leetcode"), Some(0));
/// assert_eq!(first_uniq_char("aabb"), None);
/// ```
pub fn first_uniq_char(s: &str) -> Option<usize> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in s.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    s.chars().position(|ch| counts[&ch] == 1)
}

#[derive(Clone, Debug)]
pub struct FirstUnique {
    pub s: String,
}

impl FirstUnique {
    pub fn new(s: impl Into<String>) -> Self {
        Self { s: s.into() }
    }
}

impl Drill for FirstUnique {
    type Output = Option<usize>;

    fn name(&self) -> &'static str {
        "first_unique_char"
    }

    fn input_size(&self) -> usize {
        self.s.len()
    }

    fn solve(self) -> Option<usize> {
        first_uniq_char(&self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples() {
        assert_eq!(first_uniq_char("leetcode"), Some(0));
        assert_eq!(first_uniq_char("loveleetcode"), Some(2));
        assert_eq!(first_uniq_char("aabb"), None);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(first_uniq_char(""), None);
        assert_eq!(first_uniq_char("z"), Some(0));
    }

    #[test]
    fn unique_char_at_the_end() {
        assert_eq!(first_uniq_char("aabbc"), Some(4));
    }

    #[test]
    fn index_is_in_chars() {
        assert_eq!(first_uniq_char("ééa"), Some(2));
    }
}
