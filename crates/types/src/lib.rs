//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal front-end, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid addressed as `(row, col)`, row 0 at the top
//! and column 0 at the left. An empty cell holds `0`; every other cell holds a
//! power of two no smaller than 2.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Rows and columns of the grid |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `START_TILES` | 2 | Tiles spawned by a new game |
//! | `SPAWN_FOUR_PROBABILITY` | 0.1 | Chance a spawned tile is a 4 instead of a 2 |
//! | `SWIPE_MIN_DISTANCE` | 50.0 | Minimum gesture length recognised as a swipe |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, GRID_SIZE, WIN_TILE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! // Every direction reduces to a number of clockwise quarter turns
//! assert_eq!(dir.rotations(), 3);
//! assert_eq!(Direction::Left.rotations(), 0);
//!
//! // Parse game action
//! let action = GameAction::from_str("right").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Right));
//!
//! assert_eq!(GameStatus::Won.message(), Some("You Win!"));
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Grid width and height in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: Tile = 2048;

/// Number of tiles placed by a new game
pub const START_TILES: usize = 2;

/// Probability that a spawned tile is a 4 rather than a 2
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Minimum gesture distance (in input units) before a drag counts as a swipe
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;

/// A tile value. `0` is an empty cell.
pub type Tile = u32;

/// A single row of the grid.
pub type Line = [Tile; GRID_SIZE];

/// Returns true if `value` may occupy a cell: empty, or a power of two >= 2.
///
/// # Examples
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// The four move directions
///
/// Every direction is resolved by rotating the grid clockwise until the move
/// becomes a sweep to the left, so each variant carries a quarter-turn count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Clockwise quarter turns that map this direction onto a left sweep
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.rotations(), 3);
    /// assert_eq!(Direction::Right.rotations(), 2);
    /// assert_eq!(Direction::Down.rotations(), 1);
    /// assert_eq!(Direction::Left.rotations(), 0);
    /// ```
    pub const fn rotations(self) -> u8 {
        match self {
            Direction::Up => 3,
            Direction::Right => 2,
            Direction::Down => 1,
            Direction::Left => 0,
        }
    }
}

/// Actions a front-end can apply to a session
///
/// These actions are produced by keyboard and swipe input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge all tiles in a direction
    Move(Direction),
    /// Throw away the current game and deal a fresh grid
    NewGame,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" | "restart" => Some(GameAction::NewGame),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::NewGame => "newGame",
        }
    }
}

/// Overall state of a session
///
/// A won game is reported as `Won` even when the grid is also full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Over,
}

impl GameStatus {
    /// Returns true once no further moves will be accepted
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Banner shown by a front-end for terminal states
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Won => Some("You Win!"),
            GameStatus::Over => Some("Game Over!"),
        }
    }
}
