//! The four orthogonal directions a blank square can slide in.

/// A direction the blank square slides in.
///
/// `North` moves the blank up one row (the tile above drops into the gap),
/// and so on. [`Direction::ALL`] fixes the enumeration order used by
/// [`Board::neighbours`](crate::Board::neighbours).
///
/// # Examples
///
/// ```
/// use taquin::Direction;
///
/// assert_eq!(Direction::North.offset(), (-1, 0));
/// assert_eq!(Direction::North.opposite(), Direction::South);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up one row.
    North,
    /// Right one column.
    East,
    /// Down one row.
    South,
    /// Left one column.
    West,
}

impl Direction {
    /// All four directions, in the order neighbour enumeration visits them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The `(row, col)` delta this direction applies to the blank.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
