//! Reorder log lines: letter-logs first, sorted; digit-logs after, as given.
//!
//! A log is `"<identifier> <content>"`. Content whose first character is a
//! letter makes a letter-log; anything else (digits, or no content at all) a
//! digit-log.

use crate::traits::Drill;

/// Split a log at its first space into `(identifier, content)`.
fn split_log(log: &str) -> (&str, &str) {
    log.split_once(' ').unwrap_or((log, ""))
}

fn is_letter_log(log: &str) -> bool {
    let (_, content) = split_log(log);
    content.chars().next().is_some_and(char::is_alphabetic)
}

/// Letter-logs sorted by `(content, identifier)`, then digit-logs in input order.
///
/// ```
/// use leet_drills::problems::reorder_logs::reorder_log_files;
///
/// let logs = ["dig1 8 1 5 1", "let1 art can", "dig2 3 6", "let2 own kit dig", "let3 art zero"];
/// let ordered = reorder_log_files(logs.iter().map(|s| s.to_string()).collect());
/// assert_eq!(
///     ordered,
///     ["let1 art can", "let3 art zero", "let2 own kit dig", "dig1 8 1 5 1", "dig2 3 6"]
/// );
/// ```
pub fn reorder_log_files(logs: Vec<String>) -> Vec<String> {
    let (mut letter_logs, digit_logs): (Vec<String>, Vec<String>) =
        logs.into_iter().partition(|log| is_letter_log(log));

    letter_logs.sort_by(|a, b| {
        let (a_id, a_content) = split_log(a);
        let (b_id, b_content) = split_log(b);
        a_content.cmp(b_content).then_with(|| a_id.cmp(b_id))
    });

    letter_logs.extend(digit_logs);
    letter_logs
}

#[derive(Clone, Debug)]
pub struct ReorderLogs {
    pub logs: Vec<String>,
}

impl ReorderLogs {
    pub fn new<I, S>(logs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            logs: logs.into_iter().map(Into::into).collect(),
        }
    }
}

impl Drill for ReorderLogs {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "reorder_log_files"
    }

    fn input_size(&self) -> usize {
        self.logs.len()
    }

    fn solve(self) -> Vec<String> {
        reorder_log_files(self.logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(logs: &[&str]) -> Vec<String> {
        logs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classic_example() {
        let logs = owned(&[
            "dig1 8 1 5 1",
            "let1 art can",
            "dig2 3 6",
            "let2 own kit dig",
            "let3 art zero",
        ]);
        assert_eq!(
            reorder_log_files(logs),
            owned(&[
                "let1 art can",
                "let3 art zero",
                "let2 own kit dig",
                "dig1 8 1 5 1",
                "dig2 3 6",
            ])
        );
    }

    #[test]
    fn content_ties_break_on_identifier() {
        let logs = owned(&["b1 act zoo", "a1 act zoo", "a2 act car"]);
        assert_eq!(
            reorder_log_files(logs),
            owned(&["a2 act car", "a1 act zoo", "b1 act zoo"])
        );
    }

    #[test]
    fn digit_logs_keep_order() {
        let logs = owned(&["z 9", "a 1", "m 5 5"]);
        assert_eq!(reorder_log_files(logs.clone()), logs);
    }

    #[test]
    fn log_without_content_is_a_digit_log() {
        let logs = owned(&["lonely", "x1 abc"]);
        assert_eq!(reorder_log_files(logs), owned(&["x1 abc", "lonely"]));
    }

    #[test]
    fn empty_input() {
        assert!(reorder_log_files(Vec::new()).is_empty());
    }

    #[test]
    fn drill_matches_function() {
        let drill = ReorderLogs::new(["d 1", "l abc"]);
        assert_eq!(drill.solve(), owned(&["l abc", "d 1"]));
    }
}
