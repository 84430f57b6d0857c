//! Example: flood fill through the drill runner.
//!
//! Run with:
//! `cargo run --example flood_fill`

use leet_drills::{problems::flood_fill::FloodFill, DrillRunner};

fn main() {
    let image = vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1]];
    let (sr, sc, color) = (1, 1, 2);

    let report = DrillRunner::new(FloodFill::new(image, sr, sc, color)).run();

    println!("{:?}", report.output);
    println!(
        "best of {} runs: {:?} (mean {:?})",
        report.repeats, report.best, report.mean
    );
}
