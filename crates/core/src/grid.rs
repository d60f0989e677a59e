//! Grid module - the 4x4 tile matrix
//!
//! The grid is a fixed array of rows where each cell holds a tile value.
//! `0` marks an empty cell; every other value is a power of two >= 2.
//! Coordinates: (row, col), row 0 at the top and col 0 at the left.
//!
//! `Grid` is `Copy`, so sessions hand out copies and every move produces a
//! fresh value instead of mutating a shared board.

use std::fmt;

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::{GameError, GameResult};
use crate::types::{is_valid_tile, Line, Tile, CELL_COUNT, GRID_SIZE};

/// The game grid - 4 rows x 4 columns of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Grid {
    rows: [Line; GRID_SIZE],
}

impl Grid {
    /// A grid with every cell empty
    pub const EMPTY: Grid = Grid {
        rows: [[0; GRID_SIZE]; GRID_SIZE],
    };

    /// Create a new empty grid
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a grid from rows, rejecting any cell that is not 0 or a power of two >= 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// assert_eq!(grid.get(0, 1), Some(2));
    ///
    /// assert!(Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [Line; GRID_SIZE]) -> GameResult<Self> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Build a grid from rows produced by the engine itself.
    pub(crate) const fn from_rows_unchecked(rows: [Line; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Get width (and height) of the grid
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get tile at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|line| line.get(col)).copied()
    }

    /// Place a tile at (row, col). Returns false if out of bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.rows.get_mut(row).and_then(|line| line.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Copy of a single row
    ///
    /// # Panics
    ///
    /// Panics if `row >= GRID_SIZE`.
    pub fn row(&self, row: usize) -> Line {
        self.rows[row]
    }

    pub(crate) fn set_row(&mut self, row: usize, line: Line) {
        self.rows[row] = line;
    }

    /// Read-only view of all rows
    pub fn rows(&self) -> &[Line; GRID_SIZE] {
        &self.rows
    }

    /// Iterate over every cell as `(row, col, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &value)| (row, col, value))
        })
    }

    /// Coordinates of every empty cell in row-major order (no allocation)
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells()
            .filter(|&(_, _, value)| value == 0)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Count the empty cells
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&(_, _, value)| value == 0).count()
    }

    /// Count the occupied cells
    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Highest tile value on the grid (0 for an empty grid)
    pub fn highest_tile(&self) -> Tile {
        self.cells().map(|(_, _, value)| value).max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells().map(|(_, _, value)| u64::from(value)).sum()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }
}

fn format_tile(value: Tile) -> String {
    if value == 0 {
        format!("{:^6}", ".")
    } else {
        format!("{:^6}", value)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = "-".repeat(GRID_SIZE * 7 - 1);
        for (i, line) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", divider)?;
            }
            let cells: Vec<String> = line.iter().copied().map(format_tile).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl From<Grid> for [Line; GRID_SIZE] {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl TryFrom<[Line; GRID_SIZE]> for Grid {
    type Error = GameError;

    fn try_from(rows: [Line; GRID_SIZE]) -> GameResult<Self> {
        Grid::from_rows(rows)
    }
}
