//! Longest substring without repeating characters.
//!
//! Two sliding-window variants over the characters of the input:
//! - [`length_of_longest_substring`] keeps a set of the chars inside the
//!   window and advances the left edge until the incoming char is unique,
//!   amortised O(n).
//! - [`length_of_longest_substring_rescan`] re-checks the whole window each
//!   time an edge moves, O(n^2) overall. Kept as a simple reference.

use std::collections::HashSet;

use crate::traits::Drill;

/// Length (in chars) of the longest run of `s` with no repeated char.
///
/// ```
/// use leet_drills::problems::longest_substring::length_of_longest_substring;
///
/// assert_eq!(length_of_longest_substring("abcabcbb"), 3);
/// ```
pub fn length_of_longest_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 1 {
        return chars.len();
    }

    let mut window: HashSet<char> = HashSet::new();
    let mut best = 0;
    let mut left = 0;
    for (right, &ch) in chars.iter().enumerate() {
        while window.contains(&ch) {
            window.remove(&chars[left]);
            left += 1;
        }
        window.insert(ch);
        best = best.max(right - left + 1);
    }
    best
}

/// Same answer as [`length_of_longest_substring`], re-slicing the window.
pub fn length_of_longest_substring_rescan(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 1 {
        return chars.len();
    }

    let all_unique = |window: &[char]| {
        let set: HashSet<&char> = window.iter().collect();
        set.len() == window.len()
    };

    let mut best = 1;
    let (mut left, mut right) = (0, 1);
    while left < right && right <= chars.len() {
        let window = &chars[left..right];
        if all_unique(window) {
            best = best.max(window.len());
            right += 1;
        } else {
            left += 1;
        }
    }
    best
}

#[derive(Clone, Debug)]
pub struct LongestSubstring {
    pub s: String,
}

impl LongestSubstring {
    pub fn new(s: impl Into<String>) -> Self {
        Self { s: s.into() }
    }
}

impl Drill for LongestSubstring {
    type Output = usize;

    fn name(&self) -> &'static str {
        "longest_substring"
    }

    fn input_size(&self) -> usize {
        self.s.len()
    }

    fn solve(self) -> usize {
        length_of_longest_substring(&self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(&str, usize)] = &[
        ("abcabcbb", 3),
        ("bbbbb", 1),
        ("pwwkew", 3),
        ("", 0),
        ("a", 1),
        (" ", 1),
        ("au", 2),
        ("dvdf", 3),
        ("abba", 2),
        ("tmmzuxt", 5),
    ];

    #[test]
    fn sliding_window_cases() {
        for &(s, expected) in CASES {
            assert_eq!(length_of_longest_substring(s), expected, "input {s:?}");
        }
    }

    #[test]
    fn rescan_cases() {
        for &(s, expected) in CASES {
            assert_eq!(length_of_longest_substring_rescan(s), expected, "input {s:?}");
        }
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(length_of_longest_substring("日本日本語"), 3);
        assert_eq!(length_of_longest_substring_rescan("日本日本語"), 3);
    }

    #[test]
    fn all_distinct() {
        let s: String = ('a'..='z').collect();
        assert_eq!(length_of_longest_substring(&s), 26);
        assert_eq!(length_of_longest_substring_rescan(&s), 26);
    }
}
