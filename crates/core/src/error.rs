//! Error types for the rule engine
//!
//! The engine has no I/O, so the only errors are caller mistakes: an
//! unrecognised direction string or a grid that breaks the tile invariant.

use thiserror::Error;

use crate::types::Tile;

/// Errors returned by the rule engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Direction string is not one of up, down, left, right
    #[error("invalid direction `{0}`: expected up, down, left or right")]
    InvalidDirection(String),

    /// Cell holds a value that is neither empty nor a power of two >= 2
    #[error("invalid tile {value} at ({row}, {col}): tiles must be 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Result type alias for rule engine operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidDirection("diagonal".to_string());
        assert_eq!(
            err.to_string(),
            "invalid direction `diagonal`: expected up, down, left or right"
        );

        let err = GameError::InvalidTile {
            row: 0,
            col: 2,
            value: 3,
        };
        assert!(err.to_string().starts_with("invalid tile 3 at (0, 2)"));
    }
}
