//! Benchmark: grid traversals (flood fill, max fish) on large random grids.
//!
//! Run with:
//! `cargo bench --bench perf_grid`
//!
//! Both traversals use explicit stacks, so the interesting numbers are time
//! and memory growth with the number of cells, not recursion limits.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use leet_drills::problems::{
    flood_fill::{flood_fill, flood_fill_unmarked},
    max_fish::find_max_fish,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_grid(rng: &mut StdRng, side: usize, land: f64) -> Vec<Vec<u32>> {
    (0..side)
        .map(|_| {
            (0..side)
                .map(|_| if rng.gen_bool(land) { 0 } else { rng.gen_range(1..10) })
                .collect()
        })
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for &side in &[128usize, 512, 1024] {
        group.bench_function(format!("visited_set_side_{side}"), |b| {
            b.iter_batched(
                || vec![vec![0i32; side]; side],
                |image| {
                    let before = rss_kib();
                    let filled = flood_fill(image, side / 2, side / 2, 1);
                    let after = rss_kib();
                    criterion::black_box(filled);
                    eprintln!(
                        "RSS KiB delta (flood fill {side}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("unmarked_side_{side}"), |b| {
            b.iter_batched(
                || vec![vec![0i32; side]; side],
                |image| criterion::black_box(flood_fill_unmarked(image, side / 2, side / 2, 1)),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_max_fish(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_max_fish");
    for &side in &[128usize, 512, 1024] {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = random_grid(&mut rng, side, 0.35);
        group.bench_function(format!("side_{side}"), |b| {
            b.iter(|| criterion::black_box(find_max_fish(&grid)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flood_fill, bench_max_fish);
criterion_main!(benches);
