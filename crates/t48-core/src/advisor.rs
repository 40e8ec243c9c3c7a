//! Move advisors
//!
//! An advisor looks at a read-only grid and names a direction. Strategies are
//! injected into the [`GameLoop`](crate::GameLoop) at construction.

use crate::direction::Direction;
use crate::grid::Grid;

/// Strategy that recommends the next slide
pub trait MoveAdvisor: Send {
    /// Human-readable label used in logs
    fn name(&self) -> &str;

    /// Recommend a direction for `grid`. Must not depend on hidden mutation.
    fn recommend(&self, grid: &Grid) -> Direction;
}

/// Advisor that always gives the same answer, whatever the board
#[derive(Debug, Clone)]
pub struct ConstantAdvisor {
    name: String,
    direction: Direction,
}

impl ConstantAdvisor {
    pub fn new(direction: Direction) -> Self {
        Self {
            name: format!("constant advisor ({direction})"),
            direction,
        }
    }
}

impl Default for ConstantAdvisor {
    fn default() -> Self {
        Self::new(Direction::Left)
    }
}

impl MoveAdvisor for ConstantAdvisor {
    fn name(&self) -> &str {
        &self.name
    }

    fn recommend(&self, _grid: &Grid) -> Direction {
        self.direction
    }
}
