//! Maximum number of fish a fisher can collect from one water region.
//!
//! Cells holding zero are land; every non-zero cell is water with that many
//! fish. A fisher starting on a water cell may move between 4-adjacent water
//! cells and collect everything in the region they can reach.

use std::collections::HashSet;

use crate::traits::Drill;
use crate::utils::grid_neighbours;

/// Fish counts, row-major.
pub type FishGrid = Vec<Vec<u32>>;

/// Total fish in the richest 4-connected region of non-zero cells.
///
/// ```
/// use leet_drills::problems::max_fish::find_max_fish;
///
/// let grid = vec![
///     vec![0, 2, 1, 0],
///     vec![4, 0, 0, 3],
///     vec![1, 0, 0, 4],
///     vec![0, 3, 2, 0],
/// ];
/// assert_eq!(find_max_fish(&grid), 7);
/// ```
pub fn find_max_fish(grid: &[Vec<u32>]) -> u32 {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if rows == 1 && cols == 1 {
        return grid[0][0];
    }

    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    let mut best = 0;

    for r in 0..rows {
        for c in 0..cols {
            if grid[r][c] == 0 || visited.contains(&(r, c)) {
                continue;
            }
            best = best.max(collect_region(grid, (r, c), &mut visited));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(cells = visited.len(), best, "max fish search finished");

    best
}

/// Sum the region around `seed`, marking every cell of it as visited.
fn collect_region(
    grid: &[Vec<u32>],
    seed: (usize, usize),
    visited: &mut HashSet<(usize, usize)>,
) -> u32 {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut fish = 0;
    let mut stack = vec![seed];
    visited.insert(seed);

    while let Some((r, c)) = stack.pop() {
        fish += grid[r][c];
        for (nr, nc) in grid_neighbours(r, c, rows, cols) {
            if grid[nr][nc] != 0 && visited.insert((nr, nc)) {
                stack.push((nr, nc));
            }
        }
    }
    fish
}

#[derive(Clone, Debug)]
pub struct MaxFish {
    pub grid: FishGrid,
}

impl MaxFish {
    pub fn new(grid: FishGrid) -> Self {
        Self { grid }
    }
}

impl Drill for MaxFish {
    type Output = u32;

    fn name(&self) -> &'static str {
        "find_max_fish"
    }

    fn input_size(&self) -> usize {
        self.grid.iter().map(Vec::len).sum()
    }

    fn solve(self) -> u32 {
        find_max_fish(&self.grid)
    }
}
