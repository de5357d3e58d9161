#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use gravity::*;
pub use grid::*;
pub use removal::*;
pub use terminal::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod gravity;
mod grid;
mod removal;
mod terminal;
mod tile;
mod types;

/// Board dimensions requested when a new game starts.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        Self::new_unchecked(width, height).validate()
    }

    /// Rejects degenerate boards, which may still arrive through deserialization.
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            Err(GameError::InvalidConfig {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(self)
        }
    }

    /// Shape in `(rows, cols)` order.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GameConfig::new(0, 5),
            Err(GameError::InvalidConfig {
                width: 0,
                height: 5
            })
        );
        assert!(GameConfig::new(5, 0).is_err());
        assert!(GameConfig::new_unchecked(0, 0).validate().is_err());
    }

    #[test]
    fn size_is_rows_then_cols() {
        let config = GameConfig::new(4, 3).unwrap();

        assert_eq!(config.size(), (3, 4));
        assert_eq!(config.total_cells(), 12);
    }
}
