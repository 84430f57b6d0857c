//! Anagram check by signed character counts.

use std::collections::HashMap;

use crate::traits::Drill;

/// True iff `s` and `t` hold the same multiset of characters.
///
/// ```
/// use leet_drills::problems::anagram::is_anagram;
///
/// assert!(is_anagram("anagram", "nagaram"));
/// assert!(!is_anagram("rat", "car"));
/// ```
pub fn is_anagram(s: &str, t: &str) -> bool {
    let mut counts: HashMap<char, i64> = HashMap::new();
    for ch in s.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    for ch in t.chars() {
        *counts.entry(ch).or_insert(0) -= 1;
    }
    counts.values().all(|&n| n == 0)
}

#[derive(Clone, Debug)]
pub struct ValidAnagram {
    pub s: String,
    pub t: String,
}

impl ValidAnagram {
    pub fn new(s: impl Into<String>, t: impl Into<String>) -> Self {
        Self {
            s: s.into(),
            t: t.into(),
        }
    }
}

impl Drill for ValidAnagram {
    type Output = bool;

    fn name(&self) -> &'static str {
        "valid_anagram"
    }

    fn input_size(&self) -> usize {
        self.s.len() + self.t.len()
    }

    fn solve(self) -> bool {
        is_anagram(&self.s, &self.t)
    }
}
