use alloc::vec::Vec;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Up, right, down, left.
const NEIGHBOR_OFFSETS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Rectangular board of tiles, indexed by `(row, col)` with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Tile>", into = "Array2<Tile>")]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// Deals a fresh board, drawing one color per cell in row-major order.
    pub fn generate(config: GameConfig, source: &mut impl ColorSource) -> Result<Self> {
        let config = config.validate()?;
        let data: Vec<Tile> = (0..config.total_cells())
            .map(|_| Tile::Filled(source.next_color()))
            .collect();
        let tiles = Array2::from_shape_vec(config.size().to_nd_index(), data)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_tiles(tiles)
    }

    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = tiles.dim();
        if rows > usize::from(Coord::MAX) || cols > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles })
    }

    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let col_count = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != col_count) {
            return Err(GameError::InvalidBoardShape);
        }

        let data: Vec<Tile> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let tiles = Array2::from_shape_vec((rows.len(), col_count), data)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_tiles(tiles)
    }

    /// Shape in `(rows, cols)` order.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        // bounded by `from_tiles`
        (rows as Coord, cols as Coord)
    }

    pub fn row_count(&self) -> Coord {
        self.size().0
    }

    pub fn col_count(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.get(coords).map(|tile| Cell {
            row: coords.0,
            col: coords.1,
            tile,
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles.indexed_iter().map(|((row, col), &tile)| Cell {
            row: row as Coord,
            col: col as Coord,
            tile,
        })
    }

    /// Cells of one row, left to right. Empty when `row` is out of range.
    pub fn row(&self, row: Coord) -> impl Iterator<Item = Cell> + '_ {
        (0..self.col_count()).filter_map(move |col| self.cell((row, col)))
    }

    /// Cells of one column, top to bottom. Empty when `col` is out of range.
    pub fn column(&self, col: Coord) -> impl Iterator<Item = Cell> + '_ {
        (0..self.row_count()).filter_map(move |row| self.cell((row, col)))
    }

    /// Orthogonally adjacent cells of `coords` that lie on the board, without wraparound. A position off
    /// the board has no neighbors.
    pub fn neighbors_of(&self, coords: Coord2) -> impl Iterator<Item = Cell> + '_ {
        let (row, col) = coords;
        let on_board = self.contains(coords);

        NEIGHBOR_OFFSETS
            .into_iter()
            .filter(move |_| on_board)
            .filter_map(move |(d_row, d_col)| {
                let next = (row.checked_add_signed(d_row)?, col.checked_add_signed(d_col)?);
                self.cell(next)
            })
    }

    /// Neighbors whose tile connects to `tile`. An empty `tile` has no such neighbors.
    pub fn same_color_neighbors(
        &self,
        coords: Coord2,
        tile: Tile,
    ) -> impl Iterator<Item = Cell> + '_ {
        self.neighbors_of(coords)
            .filter(move |cell| cell.tile.matches(tile))
    }

    pub fn empty_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_empty()).count() as CellCount
    }

    pub fn filled_count(&self) -> CellCount {
        self.total_cells() - self.empty_count()
    }

    pub(crate) fn set(&mut self, coords: Coord2, tile: Tile) {
        self.tiles[coords.to_nd_index()] = tile;
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<Tile>> for Grid {
    type Error = GameError;

    fn try_from(tiles: Array2<Tile>) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<Grid> for Array2<Tile> {
    fn from(grid: Grid) -> Self {
        grid.tiles
    }
}

/// Parses one line per row, one symbol per tile (see [`Tile::from_symbol`]). Blank lines and surrounding
/// whitespace are ignored.
impl FromStr for Grid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Tile::from_symbol).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn parse_builds_rectangular_grid() {
        let grid = grid("RGB\nYY.");

        assert_eq!(grid.size(), (2, 3));
        assert_eq!(grid[(0, 1)], Tile::Filled(Color::Green));
        assert_eq!(grid[(1, 2)], Tile::Empty);
        assert_eq!(grid.empty_count(), 1);
        assert_eq!(grid.filled_count(), 5);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!("RG\nR".parse::<Grid>(), Err(GameError::InvalidBoardShape));
        assert_eq!("RG\nRX".parse::<Grid>(), Err(GameError::InvalidSymbol('X')));
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        let grid = Grid::from_rows::<Vec<Tile>>(&[]).unwrap();

        assert_eq!(grid.size(), (0, 0));
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    fn cells_carry_their_position() {
        let grid = grid("RG\nBY");

        for cell in grid.cells() {
            assert_eq!(grid.get(cell.pos()), Some(cell.tile));
        }
        let order: Vec<_> = grid.cells().map(|cell| cell.pos()).collect();
        assert_eq!(order, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn column_runs_top_to_bottom() {
        let grid = grid("RG\nBY\n.R");

        let column: Vec<_> = grid.column(1).map(|cell| cell.tile.symbol()).collect();
        assert_eq!(column, ['G', 'Y', 'R']);
        assert_eq!(grid.column(2).count(), 0);
    }

    #[test]
    fn neighbors_stay_on_board() {
        let grid = grid("RGB\nYRG");

        let neighbors: Vec<_> = grid.neighbors_of((0, 0)).map(|cell| cell.pos()).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0)]);

        let neighbors: Vec<_> = grid.neighbors_of((1, 1)).map(|cell| cell.pos()).collect();
        assert_eq!(neighbors, [(0, 1), (1, 2), (1, 0)]);
    }

    #[test]
    fn far_corner_does_not_wrap() {
        let grid = grid("RGB\nYRG\nBYR");

        let neighbors: Vec<_> = grid.neighbors_of((2, 2)).map(|cell| cell.pos()).collect();
        assert_eq!(neighbors, [(1, 2), (2, 1)]);

        let neighbors: Vec<_> = grid.neighbors_of((1, 1)).map(|cell| cell.pos()).collect();
        assert_eq!(neighbors, [(0, 1), (1, 2), (2, 1), (1, 0)]);
    }

    #[test]
    fn off_board_position_has_no_neighbors() {
        let grid = grid("RGB\nYRG\nBYR");

        assert_eq!(grid.neighbors_of((3, 0)).count(), 0);
        assert_eq!(grid.neighbors_of((0, 3)).count(), 0);
        assert_eq!(grid.neighbors_of((Coord::MAX, Coord::MAX)).count(), 0);
        assert_eq!(grid.same_color_neighbors((3, 2), Tile::Filled(Color::Red)).count(), 0);
    }

    #[test]
    fn same_color_neighbors_ignore_empty() {
        let grid = grid("R.\nRR");

        let same: Vec<_> = grid
            .same_color_neighbors((1, 0), Tile::Filled(Color::Red))
            .map(|cell| cell.pos())
            .collect();
        assert_eq!(same, [(0, 0), (1, 1)]);

        assert_eq!(grid.same_color_neighbors((1, 1), Tile::Empty).count(), 0);
    }

    #[test]
    fn generate_draws_row_major() {
        let mut draws = Color::PALETTE.into_iter().cycle();
        let mut source = move || draws.next().unwrap();

        let grid = Grid::generate(GameConfig::new(3, 2).unwrap(), &mut source).unwrap();

        assert_eq!(grid, self::grid("RGB\nYRG"));
    }

    #[test]
    fn generate_draws_once_per_cell() {
        let config = GameConfig::new(7, 5).unwrap();
        let mut draws: CellCount = 0;
        let mut source = || {
            draws += 1;
            Color::Yellow
        };

        let grid = Grid::generate(config, &mut source).unwrap();

        assert_eq!(draws, config.total_cells());
        assert_eq!(grid.filled_count(), config.total_cells());
    }

    #[test]
    fn generate_rejects_degenerate_config() {
        let mut source = || Color::Red;

        let result = Grid::generate(GameConfig::new_unchecked(0, 3), &mut source);

        assert_eq!(
            result,
            Err(GameError::InvalidConfig {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn validate_coords_checks_bounds() {
        let grid = Grid::from_rows(&[vec![Tile::Empty; 2]]).unwrap();

        assert_eq!(grid.validate_coords((0, 1)), Ok((0, 1)));
        assert_eq!(grid.validate_coords((1, 0)), Err(GameError::InvalidCoords));
        assert_eq!(grid.get((0, 2)), None);
    }
}
