//! Bracket matching with a stack.

use std::collections::HashMap;

use crate::traits::Drill;

/// True iff every bracket in `s` is closed by the matching kind in the right order.
///
/// Characters that are not closing brackets are pushed on the stack, so any
/// other character left unmatched makes the string invalid.
///
/// ```
/// use leet_drills::problems::parentheses::is_valid;
///
/// assert!(is_valid("()[]{}"));
/// assert!(!is_valid("(]"));
/// ```
pub fn is_valid(s: &str) -> bool {
    let openers: HashMap<char, char> = HashMap::from([(')', '('), ('}', '{'), (']', '[')]);
    let mut stack: Vec<char> = Vec::with_capacity(s.len());

    for ch in s.chars() {
        match openers.get(&ch) {
            None => stack.push(ch),
            Some(&open) => {
                if stack.pop() != Some(open) {
                    return false;
                }
            }
        }
    }
    stack.is_empty()
}

#[derive(Clone, Debug)]
pub struct ValidParentheses {
    pub s: String,
}

impl ValidParentheses {
    pub fn new(s: impl Into<String>) -> Self {
        Self { s: s.into() }
    }
}

impl Drill for ValidParentheses {
    type Output = bool;

    fn name(&self) -> &'static str {
        "valid_parentheses"
    }

    fn input_size(&self) -> usize {
        self.s.len()
    }

    fn solve(self) -> bool {
        is_valid(&self.s)
    }
}
