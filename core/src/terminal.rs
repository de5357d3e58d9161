use crate::*;

/// True when no filled tile touches another tile of its color, i.e. no move is left.
pub fn is_terminal(grid: &Grid) -> bool {
    !has_moves(grid)
}

pub fn has_moves(grid: &Grid) -> bool {
    grid.cells().any(|cell| is_connected(grid, cell))
}

/// How many tiles currently sit in a removable region.
pub fn removable_count(grid: &Grid) -> CellCount {
    grid.cells().filter(|&cell| is_connected(grid, cell)).count() as CellCount
}

fn is_connected(grid: &Grid, cell: Cell) -> bool {
    grid.same_color_neighbors(cell.pos(), cell.tile)
        .next()
        .is_some()
}
