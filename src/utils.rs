//! Shared helpers: the runner's repeat heuristic and 4-neighbour grid stepping.
//!
//! [`default_repeats`] aims for roughly `WORK_TARGET` input elements of work
//! per timed run, so small drills are repeated more often than large ones.
//! [`grid_neighbours`] yields the in-bounds 4-neighbours of a cell.
//!
//! ```
//! use leet_drills::utils::{default_repeats, grid_neighbours, MAX_REPEATS};
//!
//! assert_eq!(default_repeats(1), MAX_REPEATS);
//! assert_eq!(default_repeats(1 << 20), 1);
//! assert_eq!(grid_neighbours(0, 0, 3, 3).count(), 2);
//! assert_eq!(grid_neighbours(1, 1, 3, 3).count(), 4);
//! ```

/// Upper bound on the number of timed repeats the runner picks on its own.
pub const MAX_REPEATS: usize = 32;

/// Rough amount of work (in input elements) one timed run should cover.
const WORK_TARGET: usize = 1 << 16;

/// Offsets of the 4-neighbourhood: down, right, left, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (0, -1), (-1, 0)];

/// Pick how many times a drill of `input_size` should be solved per report.
///
/// This is a heuristic used by [`crate::runner::DrillRunner::new`]: small
/// instances are repeated so timings rise above clock noise, large ones run once.
#[inline]
pub fn default_repeats(input_size: usize) -> usize {
    (WORK_TARGET / input_size.max(1)).clamp(1, MAX_REPEATS)
}

/// In-bounds 4-neighbours of `(row, col)` in a `rows x cols` grid.
///
/// Neighbours are yielded in [`DIRECTIONS`] order.
pub fn grid_neighbours(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

#[cfg(test)]
mod tests {
    use super::{default_repeats, grid_neighbours, MAX_REPEATS};

    #[test]
    fn small_inputs_hit_the_cap() {
        assert_eq!(default_repeats(0), MAX_REPEATS);
        assert_eq!(default_repeats(1), MAX_REPEATS);
        assert_eq!(default_repeats(2048), MAX_REPEATS);
    }

    #[test]
    fn large_inputs_run_once() {
        assert_eq!(default_repeats(1 << 16), 1);
        assert_eq!(default_repeats(1 << 20), 1);
        assert_eq!(default_repeats(usize::MAX), 1);
    }

    #[test]
    fn monotonic_non_increasing() {
        let mut prev = usize::MAX;
        for size in (0..200_000).step_by(97) {
            let r = default_repeats(size);
            assert!(r <= prev, "repeats increased at size={size}: {r} > {prev}");
            prev = r;
        }
    }

    #[test]
    fn corner_cell_has_two_neighbours() {
        let n: Vec<_> = grid_neighbours(0, 0, 3, 3).collect();
        assert_eq!(n, vec![(1, 0), (0, 1)]);
        let n: Vec<_> = grid_neighbours(2, 2, 3, 3).collect();
        assert_eq!(n, vec![(2, 1), (1, 2)]);
    }

    #[test]
    fn interior_cell_order() {
        let n: Vec<_> = grid_neighbours(1, 1, 3, 3).collect();
        assert_eq!(n, vec![(2, 1), (1, 2), (1, 0), (0, 1)]);
    }

    #[test]
    fn single_cell_grid_is_isolated() {
        assert_eq!(grid_neighbours(0, 0, 1, 1).count(), 0);
    }
}
