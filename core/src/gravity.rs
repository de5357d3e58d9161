use smallvec::SmallVec;

use crate::*;

/// Lets every filled tile fall to the bottom of its column, keeping the vertical order of the tiles.
///
/// Columns never shift sideways, so a column that empties out stays where it is.
pub fn compact(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    let height = grid.row_count();

    for col in 0..grid.col_count() {
        let filled: SmallVec<[Tile; 16]> = grid
            .column(col)
            .map(|cell| cell.tile)
            .filter(|tile| tile.is_filled())
            .collect();
        let gap = usize::from(height) - filled.len();

        let settled = core::iter::repeat_n(Tile::Empty, gap).chain(filled);
        for (row, tile) in (0..height).zip(settled) {
            next.set((row, col), tile);
        }
    }

    debug_assert_eq!(next.size(), grid.size());
    debug_assert_eq!(next.filled_count(), grid.filled_count());
    next
}
