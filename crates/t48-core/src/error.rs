//! Error types for engine construction
//!
//! Gameplay operations never fail; only building an engine from a bad
//! configuration or a malformed board does.

use thiserror::Error;

/// Invalid engine configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    ZeroSize,

    #[error("at least one spawn value is required")]
    NoSpawnValues,

    #[error("spawn values must be non-zero")]
    ZeroSpawnValue,

    #[error("win target must be positive")]
    ZeroWinTarget,
}

/// Malformed board passed in from outside the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// Errors raised while building a [`GridEngine`](crate::GridEngine)
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("grid is {found}x{found} but the engine is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
