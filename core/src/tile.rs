use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2, GameError, Result};

/// Fixed palette a tile can be dealt from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const PALETTE: [Color; 4] = [Self::Red, Self::Green, Self::Blue, Self::Yellow];

    /// Single-letter form used by text boards.
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }
}

/// Content of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Empty,
    Filled(Color),
}

impl Tile {
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Filled(color) => Some(color),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled(_))
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Filled(color) => color.symbol(),
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        Ok(match symbol.to_ascii_uppercase() {
            '.' => Self::Empty,
            'R' => Self::Filled(Color::Red),
            'G' => Self::Filled(Color::Green),
            'B' => Self::Filled(Color::Blue),
            'Y' => Self::Filled(Color::Yellow),
            _ => return Err(GameError::InvalidSymbol(symbol)),
        })
    }

    /// Whether two tiles connect; empty tiles never connect to anything.
    pub fn matches(self, other: Tile) -> bool {
        match (self, other) {
            (Self::Filled(a), Self::Filled(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for Tile {
    fn from(color: Color) -> Self {
        Self::Filled(color)
    }
}

/// A tile together with the position it occupies.
///
/// Views are produced by [`Grid`](crate::Grid) from matrix indices, so `row` and `col` always agree with
/// where the tile lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
    pub tile: Tile,
}

impl Cell {
    pub const fn pos(&self) -> Coord2 {
        (self.row, self.col)
    }
}
