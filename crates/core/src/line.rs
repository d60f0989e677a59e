//! Line operations - compress and merge a single row
//!
//! Every move is reduced to a leftward sweep of each row, so these functions
//! only ever slide toward index 0. They are pure: each takes a row by value and
//! returns a new one.

use crate::types::{Line, Tile, GRID_SIZE, WIN_TILE};

/// Result of merging (or fully sliding) one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeResult {
    pub line: Line,
    /// At least one pair of tiles combined
    pub merged: bool,
    /// Sum of the values of every tile created by a merge
    pub score_delta: u32,
    /// A merge produced the winning tile
    pub won: bool,
}

/// Value two equal tiles merge into, or `None` if they cannot merge.
///
/// Empty cells never merge, and neither do tiles whose double would not fit
/// in a [`Tile`].
pub fn merged_value(a: Tile, b: Tile) -> Option<Tile> {
    if a != 0 && a == b {
        a.checked_mul(2)
    } else {
        None
    }
}

/// Slide non-zero tiles to the left, keeping their order, and pad with zeros.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::compress;
///
/// assert_eq!(compress([0, 2, 0, 4]), [2, 4, 0, 0]);
/// assert_eq!(compress([2, 2, 2, 2]), [2, 2, 2, 2]);
/// ```
pub fn compress(line: Line) -> Line {
    let mut out = [0; GRID_SIZE];
    for (slot, tile) in out
        .iter_mut()
        .zip(line.into_iter().filter(|&tile| tile != 0))
    {
        *slot = tile;
    }
    out
}

/// Combine equal neighbours once, scanning left to right.
///
/// The left tile of a pair doubles and the right one becomes empty. A tile
/// produced by a merge is skipped so it cannot merge again in the same pass.
/// The result may contain gaps; run [`compress`] again to close them.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::merge;
///
/// let result = merge([2, 2, 2, 2]);
/// assert_eq!(result.line, [4, 0, 4, 0]);
/// assert_eq!(result.score_delta, 8);
/// assert!(result.merged);
/// ```
pub fn merge(line: Line) -> MergeResult {
    let mut result = MergeResult {
        line,
        ..MergeResult::default()
    };

    let mut i = 0;
    while i + 1 < GRID_SIZE {
        if let Some(doubled) = merged_value(result.line[i], result.line[i + 1]) {
            result.line[i] = doubled;
            result.line[i + 1] = 0;
            result.score_delta = result.score_delta.saturating_add(doubled);
            result.merged = true;
            if doubled == WIN_TILE {
                result.won = true;
            }
            i += 2;
        } else {
            i += 1;
        }
    }

    result
}

/// Full leftward sweep of one row: compress, merge, compress.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::slide;
///
/// let result = slide([2, 0, 2, 4]);
/// assert_eq!(result.line, [4, 4, 0, 0]);
/// assert_eq!(result.score_delta, 4);
/// ```
pub fn slide(line: Line) -> MergeResult {
    let merged = merge(compress(line));
    MergeResult {
        line: compress(merged.line),
        ..merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_keeps_order() {
        assert_eq!(compress([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(compress([0, 0, 0, 2]), [2, 0, 0, 0]);
        assert_eq!(compress([4, 0, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(compress([0, 8, 4, 2]), [8, 4, 2, 0]);
    }

    #[test]
    fn test_compress_idempotent() {
        let lines: [Line; 6] = [
            [0, 0, 0, 0],
            [2, 0, 2, 0],
            [0, 4, 0, 8],
            [16, 0, 0, 2],
            [2, 4, 8, 16],
            [0, 0, 2048, 0],
        ];
        for line in lines {
            let once = compress(line);
            assert_eq!(compress(once), once, "line {:?}", line);
        }
    }

    #[test]
    fn test_merge_no_pairs() {
        let result = merge([2, 4, 8, 16]);
        assert_eq!(result.line, [2, 4, 8, 16]);
        assert!(!result.merged);
        assert_eq!(result.score_delta, 0);
        assert!(!result.won);
    }

    #[test]
    fn test_merge_ignores_empty_pairs() {
        let result = merge([0, 0, 2, 0]);
        assert!(!result.merged);
        assert_eq!(result.line, [0, 0, 2, 0]);
    }

    #[test]
    fn test_merge_tile_merges_once() {
        // [4, 4, 8] must become [8, 8], not [16]
        let result = slide([4, 4, 8, 0]);
        assert_eq!(result.line, [8, 8, 0, 0]);
        assert_eq!(result.score_delta, 8);

        // three equal tiles: leftmost pair wins
        let result = slide([2, 2, 2, 0]);
        assert_eq!(result.line, [4, 2, 0, 0]);
        assert_eq!(result.score_delta, 4);
    }

    #[test]
    fn test_merge_conserves_mass() {
        let before = [8, 8, 0, 0];
        let result = slide(before);
        let sum_before: u32 = before.iter().sum();
        let sum_after: u32 = result.line.iter().sum();
        assert_eq!(sum_before, sum_after);
        assert_eq!(result.score_delta, 16);
    }

    #[test]
    fn test_merge_reaching_win_tile() {
        let result = slide([1024, 0, 1024, 0]);
        assert_eq!(result.line, [2048, 0, 0, 0]);
        assert_eq!(result.score_delta, 2048);
        assert!(result.won);
    }

    #[test]
    fn test_largest_tiles_do_not_merge() {
        let top = 1 << 31;
        let result = slide([top, top, 0, 0]);
        assert_eq!(result.line, [top, top, 0, 0]);
        assert!(!result.merged);
        assert_eq!(result.score_delta, 0);

        let result = slide([1 << 30, 1 << 30, 0, 0]);
        assert_eq!(result.line, [top, 0, 0, 0]);
        assert_eq!(result.score_delta, top);
    }

    #[test]
    fn test_score_delta_saturates() {
        let result = merge([1 << 30, 1 << 30, 1 << 30, 1 << 30]);
        assert_eq!(result.line, [1 << 31, 0, 1 << 31, 0]);
        assert_eq!(result.score_delta, u32::MAX);
    }

    #[test]
    fn test_slide_without_merge() {
        let result = slide([0, 2, 0, 4]);
        assert_eq!(result.line, [2, 4, 0, 0]);
        assert!(!result.merged);
        assert_eq!(result.score_delta, 0);
    }
}
