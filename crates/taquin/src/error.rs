//! Error types for board construction and cell access.

use std::fmt;

/// Errors raised by board construction and cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to construct a board with zero cells.
    EmptyBoard,

    /// The requested dimension exceeds [`Board::MAX_DIM`](crate::Board::MAX_DIM).
    DimensionTooLarge {
        /// The offending dimension.
        dim: usize,
        /// The largest supported dimension.
        max: usize,
    },

    /// A row's length differs from the number of rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (the number of rows).
        expected: usize,
    },

    /// A flat tile slice does not hold exactly `dim * dim` values.
    WrongCellCount {
        /// Number of tiles supplied.
        len: usize,
        /// Number of cells the board has.
        expected: usize,
    },

    /// A tile value lies outside `0..cells`.
    TileOutOfRange {
        /// The offending value.
        tile: u16,
        /// Number of cells; valid tiles are `0..cells`.
        cells: usize,
    },

    /// A tile value appears more than once.
    DuplicateTile {
        /// The repeated value.
        tile: u16,
    },

    /// A cell coordinate is outside the board.
    OutOfBounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
        /// The board dimension; valid coordinates are `0..dim`.
        dim: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { dim, max } => {
                write!(f, "dimension {dim} exceeds maximum {max}")
            }
            Self::NotSquare { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            Self::WrongCellCount { len, expected } => {
                write!(f, "got {len} tiles, expected {expected}")
            }
            Self::TileOutOfRange { tile, cells } => {
                write!(f, "tile value {tile} out of range [0, {cells})")
            }
            Self::DuplicateTile { tile } => {
                write!(f, "tile value {tile} appears more than once")
            }
            Self::OutOfBounds { row, col, dim } => {
                write!(f, "cell ({row}, {col}) out of bounds for a {dim}x{dim} board")
            }
        }
    }
}

impl std::error::Error for BoardError {}
