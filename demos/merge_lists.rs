//! Example: merge two sorted linked lists.
//!
//! Run with:
//! `cargo run --example merge_lists`

use leet_drills::problems::merge_lists::{list_from, merge_two_lists};

fn main() {
    let a = list_from([1, 2, 4]);
    let b = list_from([1, 3, 4]);

    // Both inputs move into the merge; their nodes are relinked, not copied.
    let merged = merge_two_lists(a, b);

    let rendered: Vec<String> = merged
        .as_deref()
        .map(|head| head.iter().map(|v| v.to_string()).collect())
        .unwrap_or_default();
    println!("{}", rendered.join(" -> "));
}
