//! Status checks - win and game-over detection

use crate::grid::Grid;
use crate::line::merged_value;
use crate::types::{GameStatus, GRID_SIZE};

/// Win/over flags derived from a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusReport {
    pub won: bool,
    pub over: bool,
}

impl StatusReport {
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.over {
            GameStatus::Over
        } else {
            GameStatus::Playing
        }
    }
}

/// True if any cell is empty or any orthogonal neighbours can merge.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{status::has_available_moves, Grid};
///
/// let stuck = Grid::from_rows([
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
/// ])
/// .unwrap();
/// assert!(!has_available_moves(&stuck));
/// ```
pub fn has_available_moves(grid: &Grid) -> bool {
    if grid.count_empty() > 0 {
        return true;
    }

    let rows = grid.rows();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = rows[r][c];
            if c + 1 < GRID_SIZE && merged_value(value, rows[r][c + 1]).is_some() {
                return true;
            }
            if r + 1 < GRID_SIZE && merged_value(value, rows[r + 1][c]).is_some() {
                return true;
            }
        }
    }

    false
}

/// Combine the sticky win flag with a game-over check.
///
/// A won game is never reported as over, even when the grid is also stuck.
pub fn check_status(grid: &Grid, won: bool) -> StatusReport {
    if won {
        return StatusReport {
            won: true,
            over: false,
        };
    }
    StatusReport {
        won: false,
        over: !has_available_moves(grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_cell_means_moves() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
        assert!(has_available_moves(&g));
    }

    #[test]
    fn test_horizontal_pair_means_moves() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(has_available_moves(&g));
    }

    #[test]
    fn test_vertical_pair_means_moves() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]]);
        assert!(has_available_moves(&g));
    }

    #[test]
    fn test_checkerboard_is_terminal() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!has_available_moves(&g));
        let report = check_status(&g, false);
        assert!(report.over);
        assert_eq!(report.status(), GameStatus::Over);
    }

    #[test]
    fn test_unmergeable_largest_pair_is_terminal() {
        let top = 1 << 31;
        let g = grid([[top, top, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!has_available_moves(&g));
    }

    #[test]
    fn test_win_short_circuits_over() {
        let g = grid([[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let report = check_status(&g, true);
        assert!(report.won);
        assert!(!report.over);
        assert_eq!(report.status(), GameStatus::Won);
    }

    #[test]
    fn test_playing_status() {
        let report = check_status(&Grid::new(), false);
        assert_eq!(report, StatusReport::default());
        assert_eq!(report.status(), GameStatus::Playing);
    }
}
