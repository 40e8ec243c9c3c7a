//! Grid engine: owns the board and applies every state transition
//!
//! The engine is the only writer of its grid. Each transition builds a new
//! grid and replaces the old one; readers get shared references.

use crate::config::EngineConfig;
use crate::consts::INITIAL_TILE;
use crate::direction::Direction;
use crate::error::EngineError;
use crate::grid::{Grid, Score, Tile};
use crate::rng::GameRng;
use crate::slide::slide;
use crate::status::GameStatus;

/// A tile placed by [`GridEngine::spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Board state plus the rules that change it
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    score: Score,
    moves: u64,
    config: EngineConfig,
    rng: GameRng,
}

impl GridEngine {
    /// Create an engine with an empty board.
    ///
    /// The board is not stocked; call [`reset`](Self::reset) before play.
    pub fn new(config: EngineConfig, rng: GameRng) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.size),
            score: 0,
            moves: 0,
            config,
            rng,
        })
    }

    /// Create an engine around an existing board.
    ///
    /// A board that is already won or lost reads as terminal straight away.
    pub fn with_grid(config: EngineConfig, grid: Grid, rng: GameRng) -> Result<Self, EngineError> {
        if grid.size() != config.size {
            return Err(EngineError::SizeMismatch {
                expected: config.size,
                found: grid.size(),
            });
        }
        let mut engine = Self::new(config, rng)?;
        engine.grid = grid;
        Ok(engine)
    }

    /// Create an engine around a board given row by row
    pub fn from_rows<R: AsRef<[Tile]>>(
        config: EngineConfig,
        rows: &[R],
        rng: GameRng,
    ) -> Result<Self, EngineError> {
        let grid = Grid::from_rows(rows)?;
        Self::with_grid(config, grid, rng)
    }

    /// Start a new game.
    ///
    /// Clears the board and score, then stocks between 1 and `size²`
    /// distinct random cells with [`INITIAL_TILE`].
    pub fn reset(&mut self) {
        let size = self.config.size;
        let cells = size * size;
        let count = self.rng.rnd(cells);

        let mut grid = Grid::new(size);
        for idx in self.rng.sample_indices(cells, count) {
            grid.set(idx / size, idx % size, INITIAL_TILE);
        }

        self.grid = grid;
        self.score = 0;
        self.moves = 0;
    }

    /// Place one tile drawn from the spawn values on a random empty cell.
    ///
    /// Returns `None` and leaves the board alone when no cell is empty.
    pub fn spawn_tile(&mut self) -> Option<Spawn> {
        let empty = self.grid.empty_cells();
        let &(row, col) = self.rng.choose(&empty)?;
        let value = *self.rng.choose(&self.config.spawn_values)?;

        let mut grid = self.grid.clone();
        grid.set(row, col, value);
        self.grid = grid;

        Some(Spawn { row, col, value })
    }

    /// Slide every tile toward `direction`, merging equal neighbours.
    ///
    /// Returns whether any cell changed. Merge values are added to the score.
    /// Never spawns; callers spawn only after a move that returned `true`.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let result = slide(&self.grid, direction);
        self.score = self.score.saturating_add(result.score);
        if result.changed {
            self.moves += 1;
        }
        self.grid = result.grid;
        result.changed
    }

    /// Classify the current board against the win target
    pub fn evaluate_status(&self) -> GameStatus {
        GameStatus::evaluate(&self.grid, self.config.win_target)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Status of the current board, never stale
    pub fn status(&self) -> GameStatus {
        self.evaluate_status()
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Board-changing moves since the last reset
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Seed of the engine's random source
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
