//! Rotation - quarter turns of the whole grid
//!
//! A single clockwise turn maps cell (r, c) to (c, N-1-r). Rotating by
//! `Direction::rotations()` turns any move into a left sweep; rotating by
//! [`inverse_turns`] afterwards restores the original orientation.

use crate::grid::Grid;
use crate::types::GRID_SIZE;

/// Rotate the grid 90° clockwise once
pub fn rotate_cw(grid: &Grid) -> Grid {
    let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
    for (r, line) in grid.rows().iter().enumerate() {
        for (c, &value) in line.iter().enumerate() {
            rows[c][GRID_SIZE - 1 - r] = value;
        }
    }
    Grid::from_rows_unchecked(rows)
}

/// Rotate the grid 90° clockwise `turns` times (taken modulo 4).
///
/// The input is left untouched.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{rotate::rotate, Grid};
///
/// let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let turned = rotate(&grid, 1);
/// assert_eq!(turned.get(0, 3), Some(2));
/// assert_eq!(rotate(&turned, 3), grid);
/// ```
pub fn rotate(grid: &Grid, turns: u8) -> Grid {
    (0..turns % 4).fold(*grid, |acc, _| rotate_cw(&acc))
}

/// Number of clockwise turns that undo `turns` clockwise turns
pub const fn inverse_turns(turns: u8) -> u8 {
    (4 - turns % 4) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Grid {
        Grid::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [8192, 16384, 32768, 65536],
        ])
        .unwrap()
    }

    #[test]
    fn test_single_turn_mapping() {
        let grid = numbered();
        let turned = rotate_cw(&grid);
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                assert_eq!(turned.get(c, GRID_SIZE - 1 - r), grid.get(r, c));
            }
        }
        // left column becomes the top row, read bottom-up
        assert_eq!(turned.row(0), [8192, 512, 32, 2]);
    }

    #[test]
    fn test_zero_turns_is_identity() {
        assert_eq!(rotate(&numbered(), 0), numbered());
        assert_eq!(rotate(&numbered(), 4), numbered());
    }

    #[test]
    fn test_rotation_roundtrip() {
        let grid = numbered();
        for k in 0..4 {
            let back = rotate(&rotate(&grid, k), inverse_turns(k));
            assert_eq!(back, grid, "k = {}", k);
        }
    }

    #[test]
    fn test_rotation_does_not_mutate_input() {
        let grid = numbered();
        let copy = grid;
        let _ = rotate(&grid, 3);
        assert_eq!(grid, copy);
    }

    #[test]
    fn test_inverse_turns() {
        assert_eq!(inverse_turns(0), 0);
        assert_eq!(inverse_turns(1), 3);
        assert_eq!(inverse_turns(2), 2);
        assert_eq!(inverse_turns(3), 1);
    }
}
