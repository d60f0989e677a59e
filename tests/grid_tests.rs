//! Grid tests - construction, access and rotation through the facade crate

use tui_2048::core::rotate::{inverse_turns, rotate};
use tui_2048::core::{GameError, Grid};
use tui_2048::types::{Direction, CELL_COUNT, GRID_SIZE};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.size(), GRID_SIZE);

    // All cells should be empty
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert_eq!(grid.get(row, col), Some(0), "cell ({}, {})", row, col);
        }
    }
    assert_eq!(grid.empty_cells().len(), CELL_COUNT);
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();
    assert_eq!(grid.get(GRID_SIZE, 0), None);
    assert_eq!(grid.get(0, GRID_SIZE), None);
    assert_eq!(grid.get(usize::MAX, usize::MAX), None);
}

#[test]
fn test_grid_from_rows_validates_every_cell() {
    let ok = Grid::from_rows([[0, 2, 4, 8], [16, 32, 64, 128], [0; 4], [0; 4]]);
    assert!(ok.is_ok());

    let bad = Grid::try_from([[0; 4], [0; 4], [0; 4], [0, 0, 12, 0]]);
    assert_eq!(
        bad,
        Err(GameError::InvalidTile {
            row: 3,
            col: 2,
            value: 12
        })
    );
}

#[test]
fn test_grid_rows_are_copies() {
    let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut rows: [[u32; 4]; 4] = grid.into();
    rows[0][0] = 4;
    assert_eq!(grid.get(0, 0), Some(2));
}

#[test]
fn test_rotation_roundtrip_for_every_direction() {
    let grid = Grid::from_rows([[2, 4, 0, 0], [0, 8, 0, 16], [32, 0, 0, 0], [0, 0, 64, 2]]).unwrap();

    for dir in Direction::ALL {
        let k = dir.rotations();
        assert_eq!(rotate(&rotate(&grid, k), inverse_turns(k)), grid, "{:?}", dir);
    }
}

#[test]
fn test_four_turns_is_identity() {
    let grid = Grid::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]).unwrap();
    let once = rotate(&grid, 1);
    assert_ne!(once, grid);
    assert_eq!(rotate(&once, 3), grid);
}
