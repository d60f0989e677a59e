//! Game session - the mutable state of one game
//!
//! A session owns its grid, score, win/over flags and random source. It is the
//! only public way to mutate a game: front-ends call [`GameSession::apply_move`]
//! or [`GameSession::new_game`] and read back copies through the accessors.
//!
//! Several sessions can coexist; nothing is global. Pass a seeded generator to
//! [`GameSession::with_rng`] (or use [`GameSession::seeded`]) to replay the same
//! spawns in tests.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::engine::resolve_move;
use crate::error::{GameError, GameResult};
use crate::grid::Grid;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_random_tile, Spawn};
use crate::status::{check_status, StatusReport};
use crate::types::{Direction, GameAction, GameStatus, START_TILES, WIN_TILE};

/// State change recorded for the front-end (consumed by observers)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh grid was dealt
    NewGame {
        spawned: ArrayVec<Spawn, START_TILES>,
    },
    /// Tiles moved; a new tile was spawned if a cell was free
    Moved {
        direction: Direction,
        score_delta: u32,
        spawned: Option<Spawn>,
        status: GameStatus,
    },
    /// Nothing moved; status was re-checked
    Blocked {
        direction: Direction,
        status: GameStatus,
    },
}

/// A single game of 2048
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    grid: Grid,
    score: u32,
    won: bool,
    over: bool,
    /// Successful moves since the last new game
    moves: u32,
    rng: R,
    last_event: Option<GameEvent>,
}

impl GameSession<StdRng> {
    /// Start a game with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Start a game whose spawns are fully determined by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a game drawing spawns from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut session = Self::from_grid(Grid::EMPTY, rng);
        session.new_game();
        session
    }

    /// Resume from an existing grid with score 0.
    ///
    /// No tiles are spawned. Win and over flags are derived from the grid: a
    /// grid already holding the winning tile is won, a stuck one is over.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let mut session = Self {
            grid,
            score: 0,
            won: false,
            over: false,
            moves: 0,
            rng,
            last_event: None,
        };
        session.refresh_status(grid.highest_tile() >= WIN_TILE);
        session
    }

    /// Reset to an empty grid with two random tiles
    pub fn new_game(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.won = false;
        self.over = false;
        self.moves = 0;

        let mut spawned = ArrayVec::new();
        for _ in 0..START_TILES {
            if let Some(spawn) = self.spawn_random_tile() {
                spawned.push(spawn);
            }
        }

        info!(tiles = spawned.len(), "new game");
        self.last_event = Some(GameEvent::NewGame { spawned });
    }

    /// Place a 2 or 4 in a random empty cell. No-op on a full grid.
    pub fn spawn_random_tile(&mut self) -> Option<Spawn> {
        spawn_random_tile(&mut self.grid, &mut self.rng)
    }

    /// Slide the tiles toward `direction`.
    ///
    /// Returns true if the grid changed. A finished game ignores the call and
    /// records no event. A move that changes nothing leaves grid and score
    /// alone but still re-checks for game over.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.won || self.over {
            debug!(direction = direction.as_str(), "move ignored, game finished");
            return false;
        }

        let outcome = resolve_move(&self.grid, direction);
        if !outcome.moved {
            self.refresh_status(false);
            debug!(direction = direction.as_str(), status = ?self.status(), "move blocked");
            self.last_event = Some(GameEvent::Blocked {
                direction,
                status: self.status(),
            });
            return false;
        }

        self.grid = outcome.grid;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves += 1;
        let spawned = self.spawn_random_tile();
        self.refresh_status(outcome.won);

        debug!(
            direction = direction.as_str(),
            score_delta = outcome.score_delta,
            score = self.score,
            spawned = ?spawned,
            "move resolved"
        );

        self.last_event = Some(GameEvent::Moved {
            direction,
            score_delta: outcome.score_delta,
            spawned,
            status: self.status(),
        });
        true
    }

    /// Like [`apply_move`](Self::apply_move) for a direction given as text.
    ///
    /// Unknown directions are rejected without touching the session.
    pub fn apply_move_str(&mut self, direction: &str) -> GameResult<bool> {
        let direction = Direction::from_str(direction)
            .ok_or_else(|| GameError::InvalidDirection(direction.to_string()))?;
        Ok(self.apply_move(direction))
    }

    /// Apply a front-end action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    fn refresh_status(&mut self, won_this_move: bool) {
        let before = self.status();
        let report = check_status(&self.grid, self.won || won_this_move);
        self.won = report.won;
        self.over = report.over;

        if report.status() != before {
            match report.status() {
                GameStatus::Won => info!(score = self.score, moves = self.moves, "game won"),
                GameStatus::Over => info!(score = self.score, moves = self.moves, "game over"),
                GameStatus::Playing => {}
            }
        }
    }

    /// Copy of the current grid
    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        StatusReport {
            won: self.won,
            over: self.over,
        }
        .status()
    }

    /// Take the most recent event, leaving `None` behind
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.into(),
            score: self.score,
            won: self.won,
            over: self.over,
            moves: self.moves,
            highest_tile: self.grid.highest_tile(),
            message: self.status().message(),
        }
    }
}
