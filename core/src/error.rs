use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board width and height must both be positive")]
    InvalidSize,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, requested {requested} but only {capacity} tiles fit")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
