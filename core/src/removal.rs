use alloc::collections::VecDeque;
use smallvec::SmallVec;

use crate::*;

/// Clears the connected same-color region containing `seed`.
///
/// Returns an unchanged copy when the seed is empty, off the board, or has no like-colored neighbor.
pub fn remove_region(grid: &Grid, seed: Coord2) -> Grid {
    let mut next = grid.clone();
    clear_region(&mut next, seed);
    next
}

/// Number of tiles a click at `seed` would remove, zero when nothing is removable there.
pub fn region_size(grid: &Grid, seed: Coord2) -> CellCount {
    if !is_removable(grid, seed) {
        return 0;
    }
    clear_region(&mut grid.clone(), seed)
}

fn is_removable(grid: &Grid, seed: Coord2) -> bool {
    match grid.get(seed) {
        Some(tile) => grid.same_color_neighbors(seed, tile).next().is_some(),
        None => false,
    }
}

/// Breadth-first clear in place, returning how many tiles were emptied.
///
/// A tile is blanked as soon as it is queued, which is also what keeps it from being queued twice.
pub(crate) fn clear_region(grid: &mut Grid, seed: Coord2) -> CellCount {
    if !is_removable(grid, seed) {
        return 0;
    }
    let tile = grid[seed];

    grid.set(seed, Tile::Empty);
    let mut removed: CellCount = 1;
    let mut to_visit = VecDeque::from([seed]);

    while let Some(visit_coords) = to_visit.pop_front() {
        let matching: SmallVec<[Coord2; 4]> = grid
            .same_color_neighbors(visit_coords, tile)
            .map(|cell| cell.pos())
            .collect();

        for pos in matching {
            grid.set(pos, Tile::Empty);
            removed += 1;
            to_visit.push_back(pos);
        }
    }

    log::trace!("cleared {} {:?} tiles from {:?}", removed, tile, seed);
    removed
}
