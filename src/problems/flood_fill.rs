//! Flood fill of a 4-connected colour region.
//!
//! Both variants drive the traversal with an explicit stack, so the size of
//! the region is bounded by heap memory rather than by the call stack.
//!
//! - [`flood_fill`] tracks visited cells in a set and is the canonical form.
//! - [`flood_fill_unmarked`] uses the recolouring itself as the visited mark.
//!   That only terminates while the fill colour differs from the region's
//!   colour, so it returns the image untouched when they are equal.

use std::collections::HashSet;

use crate::traits::Drill;
use crate::utils::grid_neighbours;

/// Colour grid, row-major.
pub type Image = Vec<Vec<i32>>;

/// Recolour the region containing `(sr, sc)` with `color`.
///
/// The seed must lie inside the image.
///
/// ```
/// use leet_drills::problems::flood_fill::flood_fill;
///
/// let image = vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1]];
/// let filled = flood_fill(image, 1, 1, 2);
/// assert_eq!(filled, vec![vec![2, 2, 2], vec![2, 2, 0], vec![2, 0, 1]]);
/// ```
pub fn flood_fill(mut image: Image, sr: usize, sc: usize, color: i32) -> Image {
    debug_assert!(sr < image.len() && sc < image[sr].len(), "seed out of bounds");
    let rows = image.len();
    let cols = image[sr].len();
    let previous = image[sr][sc];

    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    let mut stack = vec![(sr, sc)];
    visited.insert((sr, sc));

    while let Some((r, c)) = stack.pop() {
        image[r][c] = color;
        for (nr, nc) in grid_neighbours(r, c, rows, cols) {
            if image[nr][nc] == previous && visited.insert((nr, nc)) {
                stack.push((nr, nc));
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(cells = visited.len(), "flood fill finished");

    image
}

/// Recolour the region containing `(sr, sc)` without a visited set.
///
/// A cell is pushed only while it still holds the original colour, so a
/// recoloured cell is never revisited. Filling with the original colour is a
/// no-op.
pub fn flood_fill_unmarked(mut image: Image, sr: usize, sc: usize, color: i32) -> Image {
    debug_assert!(sr < image.len() && sc < image[sr].len(), "seed out of bounds");
    let rows = image.len();
    let cols = image[sr].len();
    let previous = image[sr][sc];
    if previous == color {
        return image;
    }

    let mut stack = vec![(sr, sc)];
    while let Some((r, c)) = stack.pop() {
        if image[r][c] != previous {
            continue;
        }
        image[r][c] = color;
        stack.extend(grid_neighbours(r, c, rows, cols).filter(|&(nr, nc)| image[nr][nc] == previous));
    }
    image
}

/// Drill wrapper around [`flood_fill`].
#[derive(Clone, Debug)]
pub struct FloodFill {
    pub image: Image,
    pub sr: usize,
    pub sc: usize,
    pub color: i32,
}

impl FloodFill {
    pub fn new(image: Image, sr: usize, sc: usize, color: i32) -> Self {
        Self {
            image,
            sr,
            sc,
            color,
        }
    }
}

impl Drill for FloodFill {
    type Output = Image;

    fn name(&self) -> &'static str {
        "flood_fill"
    }

    fn input_size(&self) -> usize {
        self.image.iter().map(Vec::len).sum()
    }

    fn solve(self) -> Image {
        flood_fill(self.image, self.sr, self.sc, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Image {
        vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1]]
    }

    #[test]
    fn fills_connected_region() {
        let expected = vec![vec![2, 2, 2], vec![2, 2, 0], vec![2, 0, 1]];
        assert_eq!(flood_fill(sample(), 1, 1, 2), expected);
        assert_eq!(flood_fill_unmarked(sample(), 1, 1, 2), expected);
    }

    #[test]
    fn same_colour_terminates_unchanged() {
        assert_eq!(flood_fill(sample(), 1, 1, 1), sample());
        assert_eq!(flood_fill_unmarked(sample(), 1, 1, 1), sample());
        let zeros = vec![vec![0, 0, 0], vec![0, 0, 0]];
        assert_eq!(flood_fill(zeros.clone(), 0, 0, 0), zeros);
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let image = vec![vec![1, 0], vec![0, 1]];
        assert_eq!(flood_fill(image, 0, 0, 5), vec![vec![5, 0], vec![0, 1]]);
    }

    #[test]
    fn isolated_seed() {
        let filled = flood_fill(sample(), 2, 2, 9);
        assert_eq!(filled, vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 9]]);
    }

    #[test]
    fn single_cell_image() {
        assert_eq!(flood_fill(vec![vec![0]], 0, 0, 3), vec![vec![3]]);
    }

    #[test]
    fn large_region_does_not_overflow() {
        let image = vec![vec![7; 1_000]; 1_000];
        let filled = flood_fill(image, 500, 500, 8);
        assert!(filled.iter().flatten().all(|&c| c == 8));
    }

    #[test]
    fn drill_matches_function() {
        let drill = FloodFill::new(sample(), 0, 0, 4);
        assert_eq!(drill.input_size(), 9);
        assert_eq!(drill.solve(), flood_fill(sample(), 0, 0, 4));
    }
}
