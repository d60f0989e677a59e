//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and move resolution.
//! It has **no dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a pure function over a `Copy` grid
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile matrix
//! - [`line`]: compress and merge a single row
//! - [`rotate`]: quarter turns that reduce every move to a left sweep
//! - [`engine`]: resolves a directional move on a grid
//! - [`status`]: win and game-over detection
//! - [`spawn`]: random 2/4 tile placement
//! - [`session`]: mutable game state and the public API
//!
//! # Game Rules
//!
//! - **Move**: all tiles slide toward the chosen side; equal neighbours merge once per move
//! - **Score**: each merge adds the value of the new tile
//! - **Spawn**: a successful move places a 2 (90%) or 4 (10%) in a random empty cell
//! - **Win**: creating a 2048 tile; the game then stops accepting moves
//! - **Game over**: no empty cell and no equal orthogonal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_types::Direction;
//!
//! // Create a reproducible game
//! let mut game = GameSession::seeded(12345);
//! assert_eq!(game.grid().count_tiles(), 2);
//!
//! // Apply moves
//! game.apply_move(Direction::Left);
//! game.apply_move(Direction::Up);
//!
//! // Check game state
//! assert!(!game.is_over());
//! assert!(game.score() % 2 == 0);
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod line;
pub mod rotate;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod status;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{resolve_move, MoveOutcome};
pub use error::{GameError, GameResult};
pub use grid::Grid;
pub use line::{compress, merge, MergeResult};
pub use session::{GameEvent, GameSession};
pub use snapshot::GameSnapshot;
pub use spawn::Spawn;
pub use status::{check_status, has_available_moves, StatusReport};
