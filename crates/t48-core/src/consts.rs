//! Game constants

use crate::grid::Tile;

/// Default board edge length
pub const DEFAULT_SIZE: usize = 4;

/// Default candidate values for spawned tiles
pub const DEFAULT_SPAWN_VALUES: [Tile; 2] = [2, 4];

/// Default tile value that wins the game
pub const DEFAULT_WIN_TARGET: Tile = 2048;

/// Value placed on every cell chosen by the initial stocking phase.
/// Independent of the configured spawn values.
pub const INITIAL_TILE: Tile = 2;
