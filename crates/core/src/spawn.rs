//! Spawn module - random tile placement
//!
//! After every successful move a new tile appears in a uniformly chosen empty
//! cell: a 2 with probability 0.9, a 4 with probability 0.1.
//!
//! The generator is always passed in, so a seeded `StdRng` reproduces the
//! same sequence of spawns for testing.

use rand::Rng;

use crate::grid::Grid;
use crate::types::{Tile, SPAWN_FOUR_PROBABILITY};

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Draw the value of a new tile: 2 (90%) or 4 (10%)
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(SPAWN_FOUR_PROBABILITY) {
        4
    } else {
        2
    }
}

/// Place a random tile in a random empty cell.
///
/// Returns `None` and leaves the grid untouched when no cell is empty.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{spawn::spawn_random_tile, Grid};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut grid = Grid::new();
/// let spawn = spawn_random_tile(&mut grid, &mut rng).unwrap();
/// assert_eq!(grid.get(spawn.row, spawn.col), Some(spawn.value));
/// assert_eq!(grid.count_tiles(), 1);
/// ```
pub fn spawn_random_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = random_tile_value(rng);
    grid.set(row, col, value);

    Some(Spawn { row, col, value })
}
