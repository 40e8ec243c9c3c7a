//! Terminal-state evaluation

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::grid::{Grid, Tile};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Classify `grid` against `win_target`.
    ///
    /// Won takes precedence: a board holding a winning tile is `Won` even if
    /// it is also full and deadlocked. A board with any empty cell is never
    /// `Lost`.
    pub fn evaluate(grid: &Grid, win_target: Tile) -> Self {
        if grid.max_tile() >= win_target {
            GameStatus::Won
        } else if grid.is_full() && !grid.has_adjacent_pair() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// No further moves are accepted until a new game
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[Tile; 4]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_win_tile() {
        let g = grid(&[[2048, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert_eq!(GameStatus::evaluate(&g, 2048), GameStatus::Won);
    }

    #[test]
    fn test_above_target_also_wins() {
        let g = grid(&[[4096, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert_eq!(GameStatus::evaluate(&g, 2048), GameStatus::Won);
    }

    #[test]
    fn test_deadlocked_board_is_lost() {
        let g = grid(&[[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);
        assert_eq!(GameStatus::evaluate(&g, 2048), GameStatus::Lost);
    }

    #[test]
    fn test_full_board_with_pair_is_playable() {
        let g = grid(&[[2, 4, 8, 16], [32, 64, 128, 256], [512, 512, 256, 128], [64, 32, 16, 8]]);
        assert_eq!(GameStatus::evaluate(&g, 2048), GameStatus::InProgress);
    }

    #[test]
    fn test_empty_cell_is_never_lost() {
        let g = grid(&[[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 0, 12], [13, 14, 15, 16]]);
        assert_eq!(GameStatus::evaluate(&g, 2048), GameStatus::InProgress);
        assert_eq!(GameStatus::evaluate(&Grid::new(4), 2048), GameStatus::InProgress);
    }

    #[test]
    fn test_win_beats_deadlock() {
        let g = grid(&[[2048, 2, 4, 8], [2, 4, 8, 16], [4, 8, 16, 32], [8, 16, 32, 64]]);
        assert!(!g.has_adjacent_pair());
        assert_eq!(GameStatus::evaluate(&g, 2048), GameStatus::Won);
    }

    #[test]
    fn test_terminal_flags() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }
}
