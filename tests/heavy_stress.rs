#![cfg(feature = "heavy")]
use leet_drills::problems::{
    flood_fill::{flood_fill, flood_fill_unmarked},
    longest_substring::length_of_longest_substring,
    max_fish::find_max_fish,
    merge_lists::{list_from, merge_two_lists},
    two_sum::two_sum,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[test]
fn heavy_flood_fill_full_grid() {
    let side = 2_000;
    let image = vec![vec![0; side]; side];
    let filled = flood_fill(image.clone(), side / 2, side / 2, 1);
    assert!(filled.iter().flatten().all(|&c| c == 1));
    let filled = flood_fill_unmarked(image, 0, 0, 1);
    assert!(filled.iter().flatten().all(|&c| c == 1));
}

#[test]
fn heavy_max_fish_random_grid() {
    let mut rng = StdRng::seed_from_u64(7);
    let side = 1_500;
    let grid: Vec<Vec<u32>> = (0..side)
        .map(|_| (0..side).map(|_| if rng.gen_bool(0.3) { 0 } else { rng.gen_range(1..10) }).collect())
        .collect();
    let total: u32 = grid.iter().flatten().sum();
    let best = find_max_fish(&grid);
    assert!(best > 0 && best <= total);
}

#[test]
fn heavy_merge_million_nodes() {
    let a = list_from((0..1_000_000).map(|i| 2 * i));
    let b = list_from((0..1_000_000).map(|i| 2 * i + 1));
    let merged = merge_two_lists(a, b);
    let head = merged.as_deref().expect("non-empty");
    assert!(head.iter().copied().eq(0..2_000_000));
}

#[test]
fn heavy_long_text_window() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_text(&mut rng, 2_000_000);
    let len = length_of_longest_substring(&s);
    assert!((1..=36).contains(&len));
}

#[test]
fn heavy_two_sum_tail_pair() {
    let len = 2_000_000;
    let mut nums: Vec<i32> = (0..len as i32).map(|i| 4 * i).collect();
    nums[len - 2] += 1;
    nums[len - 1] += 2;
    let target = nums[len - 2] + nums[len - 1];
    assert_eq!(two_sum(&nums, target), Some((len - 2, len - 1)));
}
