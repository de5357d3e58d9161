use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board dimensions {width}x{height}, both must be positive")]
    InvalidConfig { width: Coord, height: Coord },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board rows are ragged or exceed the maximum size")]
    InvalidBoardShape,
    #[error("Unknown tile symbol {0:?}")]
    InvalidSymbol(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
