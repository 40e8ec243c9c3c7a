//! Autoplay sessions
//!
//! A [`Runner`] plays whole games through a [`GameLoop`]: it asks the advisor
//! for a hint, falls back to the other directions when the hint is blocked,
//! and stops on a win, a loss or an exhausted move budget.

use std::fmt;

use tracing::{debug, info};

use t48_core::{Command, Direction, GameLoop, GameLoopResult, GameStatus, Grid, Score, Tile};

/// Result of one finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session: u64,
    pub seed: u64,
    pub status: GameStatus,
    pub score: Score,
    pub best_tile: Tile,
    pub moves: u64,
    pub final_grid: Grid,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "game {} (seed {}): {} score={} best={} moves={}",
            self.session, self.seed, self.status, self.score, self.best_tile, self.moves
        )
    }
}

/// Plays consecutive sessions on one game loop
pub struct Runner {
    game: GameLoop,
    max_moves: u64,
    sessions: u64,
}

impl Runner {
    pub fn new(game: GameLoop, max_moves: u64) -> Self {
        Self {
            game,
            max_moves,
            sessions: 0,
        }
    }

    /// Number of sessions started so far
    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    /// Stock a fresh board and play it to the end
    pub fn play_session(&mut self) -> SessionSummary {
        if self.sessions == 0 {
            self.game.start();
        } else {
            self.game.execute(Command::NewGame);
        }
        self.sessions += 1;

        while self.game.engine().moves() < self.max_moves {
            match self.step() {
                GameLoopResult::Continue => {}
                result => {
                    debug!(session = self.sessions, ?result, "session ended");
                    break;
                }
            }
        }

        let summary = self.summary();
        info!(
            session = summary.session,
            status = %summary.status,
            score = summary.score,
            best = summary.best_tile,
            moves = summary.moves,
            "session finished"
        );
        summary
    }

    /// Play one board-changing move, or report why none was possible.
    ///
    /// The hinted direction goes first, then the rest of [`Direction::ALL`].
    /// Returns `Blocked` only when every direction is blocked.
    fn step(&mut self) -> GameLoopResult {
        let hinted = match self.game.execute(Command::Hint) {
            GameLoopResult::Hint(direction) => direction,
            other => return other,
        };

        let fallbacks = Direction::ALL.into_iter().filter(|&d| d != hinted);
        for direction in std::iter::once(hinted).chain(fallbacks) {
            match self.game.execute(Command::Move(direction)) {
                GameLoopResult::Blocked => continue,
                result => return result,
            }
        }
        GameLoopResult::Blocked
    }

    fn summary(&self) -> SessionSummary {
        let engine = self.game.engine();
        SessionSummary {
            session: self.sessions,
            seed: engine.seed(),
            status: engine.status(),
            score: engine.score(),
            best_tile: engine.grid().max_tile(),
            moves: engine.moves(),
            final_grid: engine.grid().clone(),
        }
    }
}
