//! Square tile grid
//!
//! A `Grid` is an owned value: slides and spawns build a new grid (or write
//! into one the engine exclusively owns), callers outside the engine only
//! ever read it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Value of a single cell; 0 means empty
pub type Tile = u64;

/// Accumulated merge score
pub type Score = u64;

/// `size x size` matrix of tiles, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a zero-filled grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from nested rows, which must form a square
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { size, cells })
    }

    /// Build from row-major cells; `cells.len()` must be `size * size`
    pub(crate) fn from_cells(size: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at (row, col)
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Tile {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of range");
        self.cells[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        let size = self.size;
        self.cells[row * size + col] = value;
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks_exact(0) panics; a zero-sized grid simply has no rows
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Copy out as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Row-major cell values
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// No empty cell left
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&0)
    }

    /// Any two orthogonally adjacent cells hold the same value.
    ///
    /// Scans horizontal pairs first, then vertical pairs, stopping at the
    /// first match.
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        let horizontal = self.rows().any(|row| row.windows(2).any(|w| w[0] == w[1]));
        horizontal
            || (0..n.saturating_sub(1))
                .any(|r| (0..n).any(|c| self.get(r, c) == self.get(r + 1, c)))
    }

    /// Largest tile on the board
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles
    pub fn sum(&self) -> Tile {
        self.cells.iter().sum()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|v| **v != 0).count()
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let mut out = Grid::new(n);
        for r in 0..n {
            for c in 0..n {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    /// Mirror every row left-to-right
    pub fn reverse_rows(&self) -> Self {
        let mut cells = self.cells.clone();
        for row in cells.chunks_exact_mut(self.size.max(1)) {
            row.reverse();
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len().max(4);
        let rule = "-".repeat((width + 1) * self.size + 1);
        writeln!(f, "{rule}")?;
        for row in self.rows() {
            write!(f, "|")?;
            for &value in row {
                if value == 0 {
                    write!(f, "{:>width$}|", ".")?;
                } else {
                    write!(f, "{value:>width$}|")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
