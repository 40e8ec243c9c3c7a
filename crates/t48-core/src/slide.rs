//! Slide and merge arithmetic
//!
//! Every direction is expressed through one primitive, [`slide_row_left`]:
//! the grid is re-oriented so the requested direction points left, each row
//! is slid, and the orientation is undone. Right mirrors rows, Up transposes,
//! Down transposes then mirrors.

use crate::direction::Direction;
use crate::grid::{Grid, Score, Tile};

/// Result of sliding a single row toward index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSlide {
    /// The row after compaction, merging and zero padding
    pub row: Vec<Tile>,
    /// Sum of the values created by merges
    pub merged_score: Score,
    /// Number of merges performed
    pub merges: usize,
}

/// Result of sliding a whole grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// The grid after the slide
    pub grid: Grid,
    /// Score gained by merges
    pub score: Score,
    /// Number of merges performed
    pub merges: usize,
    /// Whether any cell differs from the input
    pub changed: bool,
}

/// Slide one row to the left.
///
/// Zeros are removed keeping the order of the remaining tiles, then equal
/// neighbours are merged in a single left-to-right pass. A tile created by a
/// merge never merges again in the same pass, so `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]`. The result is padded with zeros to the input length.
pub fn slide_row_left(row: &[Tile]) -> RowSlide {
    let tiles: Vec<Tile> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut out = Vec::with_capacity(row.len());
    let mut merged_score: Score = 0;
    let mut merges = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let merged = tiles[i].saturating_mul(2);
            out.push(merged);
            merged_score = merged_score.saturating_add(merged);
            merges += 1;
            i += 2;
        } else {
            out.push(tiles[i]);
            i += 1;
        }
    }
    out.resize(row.len(), 0);

    RowSlide {
        row: out,
        merged_score,
        merges,
    }
}

/// Slide every row or column of `grid` toward `direction`.
///
/// Pure: `grid` is untouched and a new grid is returned.
pub fn slide(grid: &Grid, direction: Direction) -> Slide {
    let n = grid.size();
    let oriented = orient(grid, direction);

    let mut cells = Vec::with_capacity(n * n);
    let mut score: Score = 0;
    let mut merges = 0;
    for row in oriented.rows() {
        let slid = slide_row_left(row);
        score = score.saturating_add(slid.merged_score);
        merges += slid.merges;
        cells.extend(slid.row);
    }

    let result = restore(Grid::from_cells(n, cells), direction);
    let changed = result != *grid;
    Slide {
        grid: result,
        score,
        merges,
        changed,
    }
}

/// Rotate `grid` so that `direction` points left
fn orient(grid: &Grid, direction: Direction) -> Grid {
    let grid = if direction.is_vertical() {
        grid.transpose()
    } else {
        grid.clone()
    };
    if direction.is_reversed() {
        grid.reverse_rows()
    } else {
        grid
    }
}

/// Inverse of [`orient`]
fn restore(grid: Grid, direction: Direction) -> Grid {
    let grid = if direction.is_reversed() {
        grid.reverse_rows()
    } else {
        grid
    };
    if direction.is_vertical() {
        grid.transpose()
    } else {
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[Tile]) -> Vec<Tile> {
        slide_row_left(values).row
    }

    fn grid(rows: &[[Tile; 4]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_slide_row_left_cases() {
        let cases: [([Tile; 4], [Tile; 4]); 8] = [
            ([2, 2, 0, 0], [4, 0, 0, 0]),
            ([0, 0, 0, 0], [0, 0, 0, 0]),
            ([2, 0, 0, 2], [4, 0, 0, 0]),
            ([2, 2, 2, 2], [4, 4, 0, 0]),
            ([4, 0, 0, 0], [4, 0, 0, 0]),
            ([2, 4, 2, 4], [2, 4, 2, 4]),
            ([0, 2, 0, 4], [2, 4, 0, 0]),
            ([8, 8, 4, 4], [16, 8, 0, 0]),
        ];
        for (input, expected) in cases {
            assert_eq!(row(&input), expected.to_vec(), "sliding {input:?}");
        }
    }

    #[test]
    fn test_merged_tile_does_not_chain() {
        // 4 + 4 makes 8, which must not then absorb the following 8
        assert_eq!(row(&[4, 4, 8, 0]), vec![8, 8, 0, 0]);
        assert_eq!(row(&[2, 2, 4, 8]), vec![4, 4, 8, 0]);
    }

    #[test]
    fn test_row_score_and_merges() {
        let slid = slide_row_left(&[2, 2, 2, 2]);
        assert_eq!(slid.merged_score, 8);
        assert_eq!(slid.merges, 2);

        let compaction_only = slide_row_left(&[0, 2, 0, 4]);
        assert_eq!(compaction_only.merged_score, 0);
        assert_eq!(compaction_only.merges, 0);
    }

    #[test]
    fn test_odd_row_lengths() {
        assert_eq!(row(&[]), Vec::<Tile>::new());
        assert_eq!(row(&[2]), vec![2]);
        assert_eq!(row(&[2, 2, 2]), vec![4, 2, 0]);
        assert_eq!(row(&[0, 4, 4, 0, 4]), vec![8, 4, 0, 0, 0]);
    }

    #[test]
    fn test_merge_saturates() {
        let big = Tile::MAX / 2 + 1;
        let slid = slide_row_left(&[big, big]);
        assert_eq!(slid.row, vec![Tile::MAX, 0]);
        assert_eq!(slid.merged_score, Score::MAX);
    }

    #[test]
    fn test_slide_left() {
        let g = grid(&[[2, 0, 2, 0], [4, 4, 0, 0], [0, 0, 0, 0], [8, 0, 8, 0]]);
        let s = slide(&g, Direction::Left);
        assert_eq!(s.grid, grid(&[[4, 0, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [16, 0, 0, 0]]));
        assert_eq!(s.score, 28);
        assert_eq!(s.merges, 3);
        assert!(s.changed);
    }

    #[test]
    fn test_slide_right() {
        let g = grid(&[[2, 2, 2, 2], [0, 0, 0, 0], [4, 4, 4, 4], [8, 8, 8, 8]]);
        let s = slide(&g, Direction::Right);
        assert_eq!(s.grid, grid(&[[0, 0, 4, 4], [0, 0, 0, 0], [0, 0, 8, 8], [0, 0, 16, 16]]));
        assert!(s.changed);
    }

    #[test]
    fn test_slide_up() {
        let g = grid(&[[2, 4, 0, 8], [2, 4, 0, 8], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let s = slide(&g, Direction::Up);
        assert_eq!(s.grid, grid(&[[4, 8, 0, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
    }

    #[test]
    fn test_slide_down() {
        let g = grid(&[[0, 0, 0, 0], [0, 8, 0, 16], [2, 0, 4, 0], [0, 0, 0, 0]]);
        let s = slide(&g, Direction::Down);
        assert_eq!(s.grid, grid(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 8, 4, 16]]));
    }

    #[test]
    fn test_blocked_slide_reports_unchanged() {
        let g = grid(&[[2, 4, 8, 16], [2, 4, 8, 16], [2, 4, 8, 16], [2, 4, 8, 16]]);
        let left = slide(&g, Direction::Left);
        assert!(!left.changed);
        assert_eq!(left.grid, g);
        assert!(slide(&g, Direction::Up).changed);
    }

    #[test]
    fn test_slide_does_not_touch_input() {
        let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let before = g.clone();
        let _ = slide(&g, Direction::Right);
        assert_eq!(g, before);
    }
}
