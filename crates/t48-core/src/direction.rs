//! Slide directions and driver commands

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Direction tiles slide toward
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order a driver tries them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Columns become rows before sliding (Up, Down)
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Rows are reversed before sliding (Right, Down)
    pub const fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Discrete commands a driver sends to the game loop.
///
/// Input devices map onto these; the core never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Slide all tiles
    Move(Direction),
    /// Ask the advisor for a recommended direction
    Hint,
    /// Discard the board and stock a fresh one
    NewGame,
}
