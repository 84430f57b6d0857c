use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

use leet_drills::problems::{
    anagram::ValidAnagram,
    first_unique::FirstUnique,
    flood_fill::{FloodFill, Image},
    longest_substring::{length_of_longest_substring_rescan, LongestSubstring},
    max_fish::{FishGrid, MaxFish},
    merge_lists::MergeLists,
    multiples::{sum_of_multiples_closed_form, MultiplesSum},
    parentheses::ValidParentheses,
    prime_factor::LargestPrimeFactor,
    reorder_logs::ReorderLogs,
    stock_profit::MaxProfit,
    two_sum::TwoSum,
};
use leet_drills::{Drill, DrillRunner, DrillRunnerBuilder};

type ScenarioFn = fn(&Options, &mut System) -> Vec<Measurement>;

const SCENARIOS: &[(&str, &str, ScenarioFn)] = &[
    ("merge_two_lists", "Merging two sorted linked lists", run_merge_lists),
    ("sum_of_multiples", "Summing multiples of 3 or 5", run_multiples),
    ("largest_prime_factor", "Trial-division factorisation", run_prime_factor),
    ("two_sum", "Hash-map pair lookup", run_two_sum),
    ("valid_parentheses", "Stack-based bracket matching", run_parentheses),
    ("max_profit", "Single-trade stock profit", run_max_profit),
    ("valid_anagram", "Signed character counting", run_anagram),
    ("flood_fill", "Explicit-stack flood fill", run_flood_fill),
    ("find_max_fish", "Richest connected grid region", run_max_fish),
    ("longest_substring", "Sliding-window substring search", run_longest_substring),
    ("first_unique_char", "First non-repeating character", run_first_unique),
    ("reorder_log_files", "Partition and sort log lines", run_reorder_logs),
];

fn main() {
    let options = Options::parse();

    let unknown: Vec<&str> = options
        .only
        .iter()
        .map(String::as_str)
        .filter(|name| SCENARIOS.iter().all(|(known, _, _)| known != name))
        .collect();
    if !unknown.is_empty() {
        eprintln!("drill_probe: unknown drill(s): {}", unknown.join(", "));
        eprintln!(
            "known drills: {}",
            SCENARIOS
                .iter()
                .map(|(name, _, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        std::process::exit(2);
    }

    let selected: Vec<_> = SCENARIOS
        .iter()
        .filter(|(name, _, _)| options.only.is_empty() || options.only.iter().any(|o| o == name))
        .collect();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Drill Probe: Scaling and Correctness Check");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each drill is solved on deterministic inputs of increasing size to verify:");
    eprintln!(
        "  • Correctness: results match brute-force baselines (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time and memory grow with the expected complexity");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: total wall-clock seconds across all repeats");
    eprintln!("  • best_s: fastest single repeat");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let total = selected.len();

    for (idx, (name, description, run)) in selected.into_iter().enumerate() {
        eprintln!("[{}/{}] {name}: {description}...", idx + 1, total);
        measurements.extend(run(&options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("drill_probe output error: {err}");
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "drill_probe",
    version,
    about = "Time every drill on growing inputs and check results against brute-force baselines"
)]
struct Options {
    /// Output format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest input size verified against a baseline
    #[arg(long, default_value_t = 512)]
    verify_limit: usize,

    /// Fixed number of repeats per measurement (default: sized heuristic)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    repeats: Option<u32>,

    /// Untimed solves before each measurement
    #[arg(long, default_value_t = 0)]
    warmup: u32,

    /// Restrict the probe to the named drill (repeatable)
    #[arg(long = "only", value_name = "DRILL")]
    only: Vec<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    repeats: usize,
    wall_s: f64,
    best_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

/// One probe input: the drill plus the baseline answer when it was computed.
struct Case<D: Drill> {
    size_desc: String,
    drill: D,
    expected: Option<D::Output>,
}

fn probe<D, I>(scenario: &'static str, cases: I, options: &Options, sys: &mut System) -> Vec<Measurement>
where
    D: Drill + Clone,
    I: IntoIterator<Item = Case<D>>,
    I::IntoIter: ExactSizeIterator,
{
    let cases = cases.into_iter();
    let total = cases.len();

    cases
        .enumerate()
        .map(|(idx, case)| {
            eprint!("      [{}/{}] {}... ", idx + 1, total, case.size_desc);
            let runner = build_runner(case.drill, options);

            let before = rss_kib(sys);
            let start = Instant::now();
            let report = runner.run();
            let duration = start.elapsed();
            let after = rss_kib(sys);

            let (status, detail) = match &case.expected {
                None => (VerificationStatus::NotChecked, None),
                Some(expected) if *expected == report.output => (VerificationStatus::Passed, None),
                Some(expected) => (
                    VerificationStatus::Failed,
                    Some(format!("expected {}, got {}", preview(expected), preview(&report.output))),
                ),
            };

            let m = Measurement {
                scenario,
                size_desc: case.size_desc,
                repeats: report.repeats,
                wall_s: duration.as_secs_f64(),
                best_s: report.best.as_secs_f64(),
                rss_delta_kib: after.saturating_sub(before),
                verification_status: status,
                verification_detail: detail,
            };
            eprintln!(
                "{} answer={}, repeats={}, best={:.6}s, status={}",
                m.verification_status.icon(),
                preview(&report.output),
                m.repeats,
                m.best_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn build_runner<D: Drill>(drill: D, options: &Options) -> DrillRunner<D> {
    let builder = DrillRunnerBuilder::new(drill).with_warmup(options.warmup as usize);
    match options.repeats {
        Some(r) => builder.with_repeats(r as usize).build(),
        None => builder.build(),
    }
}

/// Debug rendering clipped so large answers (grids, log lists) stay readable.
fn preview<T: Debug>(value: &T) -> String {
    const MAX: usize = 60;
    let text = format!("{value:?}");
    if text.chars().count() <= MAX {
        text
    } else {
        let head: String = text.chars().take(MAX).collect();
        format!("{head}…")
    }
}

fn run_merge_lists(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144];
    let cases = SIZES.iter().map(|&len| {
        let a: Vec<i64> = (0..len as i64).map(|i| 2 * i).collect();
        let b: Vec<i64> = (0..len as i64).map(|i| 3 * i).collect();
        let expected = (len <= options.verify_limit).then(|| {
            let mut all = [a.clone(), b.clone()].concat();
            all.sort();
            all
        });
        Case {
            size_desc: format!("len={len}"),
            drill: MergeLists::from_slices(&a, &b),
            expected,
        }
    });
    probe("merge_two_lists", cases, options, sys)
}

fn run_multiples(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const LIMITS: &[u64] = &[1_000, 10_000, 100_000, 1_000_000, 10_000_000];
    // The closed form is O(1), so every limit is verified.
    let cases = LIMITS.iter().map(|&limit| Case {
        size_desc: format!("limit={limit}"),
        drill: MultiplesSum::new(limit),
        expected: Some(sum_of_multiples_closed_form(limit)),
    });
    probe("sum_of_multiples", cases, options, sys)
}

fn run_prime_factor(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const KNOWN: &[(u64, u64)] = &[
        (13_195, 29),
        (600_851_475_143, 6_857),
        (2_147_483_647, 2_147_483_647),
        (999_983 * 1_000_003, 1_000_003),
        (1 << 62, 2),
        (u64::MAX, 6_700_417),
    ];
    let cases = KNOWN.iter().map(|&(n, answer)| Case {
        size_desc: format!("n={n}"),
        drill: LargestPrimeFactor::new(n),
        expected: Some(answer),
    });
    probe("largest_prime_factor", cases, options, sys)
}

fn run_two_sum(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let cases = SIZES.iter().map(|&len| {
        let nums = planted_pair(len);
        let target = nums[len / 3] + nums[2 * len / 3];
        let expected = (len <= options.verify_limit).then(|| brute_two_sum(&nums, target));
        Case {
            size_desc: format!("len={len}"),
            drill: TwoSum::new(nums, target),
            expected,
        }
    });
    probe("two_sum", cases, options, sys)
}

fn run_parentheses(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let cases = SIZES.iter().map(|&len| {
        let s = balanced_brackets(len);
        let expected = (s.len() <= options.verify_limit).then(|| reduce_bracket_pairs(&s));
        Case {
            size_desc: format!("len={}", s.len()),
            drill: ValidParentheses::new(s),
            expected,
        }
    });
    probe("valid_parentheses", cases, options, sys)
}

fn run_max_profit(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let cases = SIZES.iter().map(|&len| {
        let prices: Vec<u32> = (0..len).map(|i| ((i * 7919 + 13) % 1009) as u32).collect();
        let expected = (len <= options.verify_limit).then(|| brute_max_profit(&prices));
        Case {
            size_desc: format!("len={len}"),
            drill: MaxProfit::new(prices),
            expected,
        }
    });
    probe("max_profit", cases, options, sys)
}

fn run_anagram(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let cases = SIZES.iter().map(|&len| {
        let s = deterministic_text(len);
        let t: String = s.chars().rev().collect();
        let expected = (len <= options.verify_limit).then(|| sorted_chars(&s) == sorted_chars(&t));
        Case {
            size_desc: format!("len={len}"),
            drill: ValidAnagram::new(s, t),
            expected,
        }
    });
    probe("valid_anagram", cases, options, sys)
}

fn run_flood_fill(options: &Options, sys: &mut System) -> Vec<Measurement> {
    probe("flood_fill", flood_fill_cases(options), options, sys)
}

fn run_max_fish(options: &Options, sys: &mut System) -> Vec<Measurement> {
    probe("find_max_fish", max_fish_cases(options), options, sys)
}

const GRID_SIDES: &[usize] = &[16, 64, 256, 1024];

/// Grid inputs are gated on their cell count, like every other input size.
fn grid_verified(side: usize, options: &Options) -> bool {
    side * side <= options.verify_limit
}

fn flood_fill_cases(options: &Options) -> impl ExactSizeIterator<Item = Case<FloodFill>> + '_ {
    const COLOR: i32 = 5;
    GRID_SIDES.iter().map(move |&side| {
        let image = walled_image(side);
        let expected = grid_verified(side, options).then(|| bfs_fill(image.clone(), 0, 0, COLOR));
        Case {
            size_desc: format!("side={side} cells={}", side * side),
            drill: FloodFill::new(image, 0, 0, COLOR),
            expected,
        }
    })
}

fn max_fish_cases(options: &Options) -> impl ExactSizeIterator<Item = Case<MaxFish>> + '_ {
    GRID_SIDES.iter().map(move |&side| {
        let grid = pond_grid(side);
        let expected = grid_verified(side, options).then(|| bfs_max_fish(&grid));
        Case {
            size_desc: format!("side={side} cells={}", side * side),
            drill: MaxFish::new(grid),
            expected,
        }
    })
}

fn run_longest_substring(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let cases = SIZES.iter().map(|&len| {
        let s = deterministic_text(len);
        let expected = (len <= options.verify_limit).then(|| length_of_longest_substring_rescan(&s));
        Case {
            size_desc: format!("len={len}"),
            drill: LongestSubstring::new(s),
            expected,
        }
    });
    probe("longest_substring", cases, options, sys)
}

fn run_first_unique(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
    let cases = SIZES.iter().map(|&len| {
        let text = deterministic_text(len);
        let s = format!("{text}{text}Z");
        let expected = (len <= options.verify_limit).then(|| quadratic_first_unique(&s));
        Case {
            size_desc: format!("len={}", s.len()),
            drill: FirstUnique::new(s),
            expected,
        }
    });
    probe("first_unique_char", cases, options, sys)
}

fn run_reorder_logs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144];
    let cases = SIZES.iter().map(|&count| {
        let logs = synthetic_logs(count);
        let expected = (count <= options.verify_limit).then(|| baseline_reorder(&logs));
        Case {
            size_desc: format!("logs={count}"),
            drill: ReorderLogs::new(logs),
            expected,
        }
    });
    probe("reorder_log_files", cases, options, sys)
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Probe Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1);
    let pct = |n: usize| 100.0 * n as f64 / total as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total measurements: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, pct(passed));
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, pct(failed));
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        pct(not_checked)
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Measurements:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("Timing by Drill:");
    eprintln!();

    let mut order: Vec<&str> = Vec::new();
    let mut by_scenario: HashMap<&str, Vec<&Measurement>> = HashMap::new();
    for m in measurements {
        by_scenario
            .entry(m.scenario)
            .or_insert_with(|| {
                order.push(m.scenario);
                Vec::new()
            })
            .push(m);
    }

    for scenario in order {
        let ms = &by_scenario[scenario];
        let best: Vec<f64> = ms.iter().map(|m| m.best_s).collect();
        let min_time = best.iter().copied().fold(f64::INFINITY, f64::min);
        let max_time = best.iter().copied().fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);

        eprintln!("  {scenario}:");
        eprintln!("    Sizes: {}", ms.len());
        eprintln!("    Best solve: min={min_time:.6}s, max={max_time:.6}s");
        eprintln!("    Memory: max_delta={max_mem} KiB");
        if let (Some(first), Some(last)) = (ms.first(), ms.last()) {
            if ms.len() >= 2 && first.best_s > 0.0 {
                eprintln!(
                    "    Scaling: {:.1}x slower from {} to {}",
                    last.best_s / first.best_s,
                    first.size_desc,
                    last.size_desc
                );
            }
        }
        eprintln!();
    }

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified measurements passed.");
    } else {
        eprintln!("✗ {failed} measurement(s) failed. Please review the errors above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,repeats,wall_s,best_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.6},{:.6},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.repeats,
            m.wall_s,
            m.best_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>7}  {:>10}  {:>10}  {:>14}  {:>12}  {}",
        "scenario", "size", "repeats", "wall_s", "best_s", "rss_delta_kib", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<7}  {:-<10}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>7}  {:>10.6}  {:>10.6}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.repeats,
            m.wall_s,
            m.best_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let text = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Deterministic inputs
// ---------------------------------------------------------------------------

fn deterministic_text(len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + i / 13) % ALPHABET.len()] as char)
        .collect()
}

/// Multiples of four everywhere except one `4x + 1` and one `4y + 2`, so the
/// only pair summing to `3 (mod 4)` sits at `len / 3` and `2 * len / 3`.
fn planted_pair(len: usize) -> Vec<i32> {
    let mut nums: Vec<i32> = (0..len as i32).map(|i| 4 * i).collect();
    nums[len / 3] += 1;
    nums[2 * len / 3] += 2;
    nums
}

fn balanced_brackets(min_len: usize) -> String {
    const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];
    let mut s = String::with_capacity(min_len + 16);
    let mut group = 0usize;
    while s.len() < min_len {
        let depth = 1 + group % 8;
        let kinds: Vec<(char, char)> = (0..depth).map(|d| PAIRS[(group + d) % 3]).collect();
        s.extend(kinds.iter().map(|&(open, _)| open));
        s.extend(kinds.iter().rev().map(|&(_, close)| close));
        group += 1;
    }
    s
}

/// Walls every fourth row with a gap every eighth column; the seed region is
/// the zero-valued maze around them.
fn walled_image(side: usize) -> Image {
    (0..side)
        .map(|r| {
            (0..side)
                .map(|c| i32::from(r % 4 == 3 && c % 8 != 7))
                .collect()
        })
        .collect()
}

fn pond_grid(side: usize) -> FishGrid {
    (0..side)
        .map(|r| {
            (0..side)
                .map(|c| {
                    if (r + c) % 5 == 0 || r % 7 == 3 {
                        0
                    } else {
                        ((r * 31 + c * 17) % 10) as u32
                    }
                })
                .collect()
        })
        .collect()
}

fn synthetic_logs(count: usize) -> Vec<String> {
    let word = |seed: usize| -> String {
        (0..3)
            .map(|k| (b'a' + ((seed / 26usize.pow(k)) % 26) as u8) as char)
            .collect()
    };
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                format!("let{} {} {}", i % 17, word(i * 7), word(i / 5))
            } else {
                format!("dig{i} {} {}", i % 97, i % 13)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Brute-force baselines
// ---------------------------------------------------------------------------

fn brute_two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    for j in 0..nums.len() {
        for i in 0..j {
            if i64::from(nums[i]) + i64::from(nums[j]) == i64::from(target) {
                return Some((i, j));
            }
        }
    }
    None
}

fn reduce_bracket_pairs(s: &str) -> bool {
    let mut current = s.to_string();
    loop {
        let next = current.replace("()", "").replace("[]", "").replace("{}", "");
        if next.len() == current.len() {
            return next.is_empty();
        }
        current = next;
    }
}

fn brute_max_profit(prices: &[u32]) -> u32 {
    let mut best = 0;
    for buy in 0..prices.len() {
        for sell in buy + 1..prices.len() {
            best = best.max(prices[sell].saturating_sub(prices[buy]));
        }
    }
    best
}

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

fn bfs_fill(mut image: Image, sr: usize, sc: usize, color: i32) -> Image {
    let rows = image.len();
    let cols = image[0].len();
    let previous = image[sr][sc];
    let mut seen = vec![vec![false; cols]; rows];
    let mut queue = VecDeque::from([(sr, sc)]);
    seen[sr][sc] = true;
    while let Some((r, c)) = queue.pop_front() {
        image[r][c] = color;
        let candidates = [
            (r + 1, c),
            (r, c + 1),
            (r.wrapping_sub(1), c),
            (r, c.wrapping_sub(1)),
        ];
        for (nr, nc) in candidates {
            if nr < rows && nc < cols && !seen[nr][nc] && image[nr][nc] == previous {
                seen[nr][nc] = true;
                queue.push_back((nr, nc));
            }
        }
    }
    image
}

fn bfs_max_fish(grid: &[Vec<u32>]) -> u32 {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    let mut seen = vec![vec![false; cols]; rows];
    let mut best = 0;
    for sr in 0..rows {
        for sc in 0..cols {
            if seen[sr][sc] || grid[sr][sc] == 0 {
                continue;
            }
            let mut total = 0;
            let mut queue = VecDeque::from([(sr, sc)]);
            seen[sr][sc] = true;
            while let Some((r, c)) = queue.pop_front() {
                total += grid[r][c];
                let candidates = [
                    (r + 1, c),
                    (r, c + 1),
                    (r.wrapping_sub(1), c),
                    (r, c.wrapping_sub(1)),
                ];
                for (nr, nc) in candidates {
                    if nr < rows && nc < cols && !seen[nr][nc] && grid[nr][nc] != 0 {
                        seen[nr][nc] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
            best = best.max(total);
        }
    }
    best
}

fn quadratic_first_unique(s: &str) -> Option<usize> {
    let chars: Vec<char> = s.chars().collect();
    (0..chars.len()).find(|&i| chars.iter().filter(|&&c| c == chars[i]).count() == 1)
}

fn baseline_reorder(logs: &[String]) -> Vec<String> {
    let mut letters: Vec<(String, String, String)> = Vec::new();
    let mut digits: Vec<String> = Vec::new();
    for log in logs {
        let (id, content) = log.split_once(' ').unwrap_or((log.as_str(), ""));
        if content.starts_with(|c: char| c.is_alphabetic()) {
            letters.push((content.to_string(), id.to_string(), log.clone()));
        } else {
            digits.push(log.clone());
        }
    }
    letters.sort();
    letters
        .into_iter()
        .map(|(_, _, log)| log)
        .chain(digits)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Options {
        Options::parse_from(std::iter::once("drill_probe").chain(args.iter().copied()))
    }

    #[test]
    fn grid_verification_counts_cells() {
        let opts = options(&[]);
        assert_eq!(opts.verify_limit, 512);

        let checked: Vec<bool> = flood_fill_cases(&opts).map(|c| c.expected.is_some()).collect();
        assert_eq!(checked, vec![true, false, false, false]);

        let checked: Vec<bool> = max_fish_cases(&opts).map(|c| c.expected.is_some()).collect();
        assert_eq!(checked, vec![true, false, false, false]);
    }

    #[test]
    fn raised_limit_verifies_larger_grids() {
        let opts = options(&["--verify-limit", "65536"]);
        let checked: Vec<bool> = max_fish_cases(&opts).map(|c| c.expected.is_some()).collect();
        assert_eq!(checked, vec![true, true, true, false]);
    }

    #[test]
    fn verified_grid_cases_match_drills() {
        let opts = options(&["--warmup", "1", "--repeats", "2"]);
        for case in flood_fill_cases(&opts).take(1) {
            let runner = build_runner(case.drill, &opts);
            assert_eq!(runner.warmup(), 1);
            assert_eq!(Some(runner.run().output), case.expected);
        }
        for case in max_fish_cases(&opts).take(1) {
            assert_eq!(Some(case.drill.solve()), case.expected);
        }
    }
}
