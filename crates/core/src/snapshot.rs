//! Read-only copy of a session for front-ends.

use serde::Serialize;

use crate::types::{Line, Tile, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    pub grid: [Line; GRID_SIZE],
    pub score: u32,
    pub won: bool,
    pub over: bool,
    pub moves: u32,
    pub highest_tile: Tile,
    /// "You Win!" or "Game Over!" once the game has ended
    pub message: Option<&'static str>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.won && !self.over
    }
}
