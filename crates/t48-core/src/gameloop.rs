//! Command-driven game loop
//!
//! Sequences engine calls the way an interactive driver does: slide, spawn
//! only after a board-changing slide, then classify the board.

use tracing::{debug, info};

use crate::advisor::MoveAdvisor;
use crate::direction::{Command, Direction};
use crate::engine::GridEngine;
use crate::status::GameStatus;

/// Outcome of a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// The board changed and play goes on
    Continue,
    /// The slide changed nothing; no tile was spawned
    Blocked,
    /// The board now holds a winning tile
    PlayerWon,
    /// No empty cell and no mergeable pair remain
    PlayerLost,
    /// The advisor's recommendation
    Hint(Direction),
    /// A fresh board was stocked
    Restarted,
    /// The game is over; only a new game is accepted
    Ignored,
}

/// Engine plus advisor, driven by discrete commands
pub struct GameLoop {
    engine: GridEngine,
    advisor: Box<dyn MoveAdvisor>,
}

impl GameLoop {
    /// Create a new game loop around an engine and an advisor
    pub fn new(engine: GridEngine, advisor: Box<dyn MoveAdvisor>) -> Self {
        info!(advisor = advisor.name(), "move advisor deployed");
        Self { engine, advisor }
    }

    /// Stock the first board
    pub fn start(&mut self) {
        self.engine.reset();
        info!(seed = self.engine.seed(), size = self.engine.size(), "game started");
    }

    /// Get reference to the engine
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Consume the game loop and return the owned engine
    pub fn into_engine(self) -> GridEngine {
        self.engine
    }

    pub fn advisor(&self) -> &dyn MoveAdvisor {
        self.advisor.as_ref()
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        match command {
            Command::NewGame => {
                self.engine.reset();
                info!(seed = self.engine.seed(), "new game");
                GameLoopResult::Restarted
            }
            _ if self.engine.status().is_terminal() => {
                debug!(?command, status = %self.engine.status(), "command ignored, game over");
                GameLoopResult::Ignored
            }
            Command::Hint => {
                let direction = self.advisor.recommend(self.engine.grid());
                info!(advisor = self.advisor.name(), %direction, "advisor recommends");
                GameLoopResult::Hint(direction)
            }
            Command::Move(direction) => self.play(direction),
        }
    }

    fn play(&mut self, direction: Direction) -> GameLoopResult {
        if !self.engine.apply_move(direction) {
            debug!(%direction, "move blocked");
            return GameLoopResult::Blocked;
        }

        if let Some(spawn) = self.engine.spawn_tile() {
            debug!(row = spawn.row, col = spawn.col, value = spawn.value, "tile spawned");
        }

        match self.engine.evaluate_status() {
            GameStatus::Won => {
                info!(score = self.engine.score(), moves = self.engine.moves(), "game won");
                GameLoopResult::PlayerWon
            }
            GameStatus::Lost => {
                info!(score = self.engine.score(), moves = self.engine.moves(), "game over");
                GameLoopResult::PlayerLost
            }
            GameStatus::InProgress => GameLoopResult::Continue,
        }
    }
}
