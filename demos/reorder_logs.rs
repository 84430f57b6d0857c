//! Example: reorder log files.
//!
//! Run with:
//! `cargo run --example reorder_logs`

use leet_drills::problems::reorder_logs::reorder_log_files;

fn main() {
    let logs = vec![
        "dig1 8 1 5 1".to_string(),
        "let1 art can".to_string(),
        "dig2 3 6".to_string(),
        "let2 own kit dig".to_string(),
        "let3 art zero".to_string(),
    ];

    for line in reorder_log_files(logs) {
        println!("{line}");
    }
}
