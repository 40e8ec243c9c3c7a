//! t48-core: Core game logic for a 2048-style tile-merging puzzle
//!
//! This crate contains the grid engine and its collaborators with no
//! terminal or rendering dependencies. It is designed to be pure and testable:
//! every piece of configuration and the random source are passed in at
//! construction.

pub mod advisor;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod slide;
pub mod status;

mod consts;
mod gameloop;
mod rng;

pub use advisor::{ConstantAdvisor, MoveAdvisor};
pub use config::EngineConfig;
pub use consts::*;
pub use direction::{Command, Direction};
pub use engine::{GridEngine, Spawn};
pub use error::{ConfigError, EngineError, GridError};
pub use gameloop::{GameLoop, GameLoopResult};
pub use grid::{Grid, Score, Tile};
pub use rng::GameRng;
pub use slide::{RowSlide, Slide, slide, slide_row_left};
pub use status::GameStatus;
