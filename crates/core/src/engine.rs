//! Move engine - resolves one directional move on a grid
//!
//! The grid is rotated so the move becomes a left sweep, every row is slid
//! independently, and the result is rotated back. Nothing here touches
//! randomness: spawning the follow-up tile is the session's job.

use crate::grid::Grid;
use crate::line::slide;
use crate::rotate::{inverse_turns, rotate};
use crate::types::{Direction, GRID_SIZE};

/// Outcome of resolving a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Grid after the move, in the caller's orientation
    pub grid: Grid,
    /// At least one row changed (a plain slide counts)
    pub moved: bool,
    /// Sum of every merged tile's new value
    pub score_delta: u32,
    /// A merge produced the winning tile
    pub won: bool,
}

/// Slide and merge every tile toward `direction`.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{engine::resolve_move, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let outcome = resolve_move(&grid, Direction::Right);
/// assert_eq!(outcome.grid.row(0), [0, 0, 0, 4]);
/// assert_eq!(outcome.score_delta, 4);
/// assert!(outcome.moved);
/// ```
pub fn resolve_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let turns = direction.rotations();
    let mut swept = rotate(grid, turns);

    let mut moved = false;
    let mut score_delta = 0;
    let mut won = false;

    for r in 0..GRID_SIZE {
        let before = swept.row(r);
        let result = slide(before);
        if result.line != before {
            moved = true;
        }
        score_delta = result.score_delta.saturating_add(score_delta);
        won |= result.won;
        swept.set_row(r, result.line);
    }

    MoveOutcome {
        grid: rotate(&swept, inverse_turns(turns)),
        moved,
        score_delta,
        won,
    }
}

/// Returns true if moving in `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    resolve_move(grid, direction).moved
}
