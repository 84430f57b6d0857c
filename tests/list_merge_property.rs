use leet_drills::problems::merge_lists::{list_from, list_to_vec, merge_two_lists, MergeLists};
use leet_drills::{Drill, DrillRunner};
use proptest::prelude::*;

fn sorted(mut v: Vec<i32>) -> Vec<i32> {
    v.sort();
    v
}

proptest! {
    #[test]
    fn merge_is_sorted_permutation(
        a in prop::collection::vec(-50i32..50, 0..40).prop_map(sorted),
        b in prop::collection::vec(-50i32..50, 0..40).prop_map(sorted),
    ) {
        let merged = list_to_vec(&merge_two_lists(list_from(a.clone()), list_from(b.clone())));

        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert!(merged.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = [a, b].concat();
        expected.sort();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn ties_keep_first_list_ahead(
        keys_a in prop::collection::vec(0u8..5, 0..20).prop_map(|mut v| { v.sort(); v }),
        keys_b in prop::collection::vec(0u8..5, 0..20).prop_map(|mut v| { v.sort(); v }),
    ) {
        // (key, source) pairs compare by key first; the source decides ties,
        // so a stable merge equals a plain sort with source 0 < source 1.
        let a: Vec<(u8, u8)> = keys_a.iter().map(|&k| (k, 0)).collect();
        let b: Vec<(u8, u8)> = keys_b.iter().map(|&k| (k, 1)).collect();
        let merged = list_to_vec(&merge_two_lists(list_from(a.clone()), list_from(b.clone())));

        let mut expected = [a, b].concat();
        expected.sort();
        prop_assert_eq!(merged, expected);
    }
}

#[test]
fn runner_reports_merge() {
    let drill = MergeLists::from_slices(&[1, 3, 5], &[2, 4]);
    assert_eq!(drill.input_size(), 5);
    let report = DrillRunner::with_repeats(drill, 4).run();
    assert_eq!(report.output, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.repeats, 4);
}
