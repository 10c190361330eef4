//! The immutable N×N sliding-tile board.

use std::fmt;

use smallvec::SmallVec;

use crate::direction::Direction;
use crate::error::BoardError;

/// One configuration of the N×N sliding-tile puzzle.
///
/// Tiles carry the values `1..N²-1`, each exactly once; `0` marks the blank
/// square. The goal configuration reads `1, 2, .., N²-1` in row-major order
/// with the blank in the bottom-right corner.
///
/// Both heuristic distances to the goal are computed in a single pass during
/// construction and cached, so [`hamming`](Board::hamming) and
/// [`manhattan`](Board::manhattan) are O(1) reads. A board never changes
/// after construction: [`slide`](Board::slide) produces a fresh board and
/// leaves the original untouched, so boards can be cloned cheaply, shared
/// across threads, and used as keys in visited sets.
///
/// # Examples
///
/// ```
/// use taquin::Board;
///
/// let board = Board::from_rows(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
/// assert_eq!(board.hamming(), 5);
/// assert_eq!(board.manhattan(), 10);
/// assert!(board.is_solvable());
/// assert_eq!(board.neighbours().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    dim: usize,
    tiles: Vec<u16>,
    blank: usize,
    hamming: u32,
    manhattan: u32,
}

impl Board {
    /// Largest supported dimension. Tiles are stored as `u16` and every
    /// value in `0..N²` must fit: `256² - 1 == u16::MAX`.
    pub const MAX_DIM: usize = 256;

    /// Builds a board from equal-length rows of tiles.
    ///
    /// The grid is copied; the caller keeps ownership of its rows. The input
    /// must be square and contain every value in `0..N²` exactly once, with
    /// `0` standing for the blank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyBoard`] for zero rows,
    /// [`BoardError::DimensionTooLarge`] beyond [`Board::MAX_DIM`],
    /// [`BoardError::NotSquare`] when a row's length differs from the row
    /// count, and [`BoardError::TileOutOfRange`] or
    /// [`BoardError::DuplicateTile`] when the values are not a permutation
    /// of `0..N²`.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self, BoardError> {
        let dim = rows.len();
        check_dim(dim)?;
        let mut tiles = Vec::with_capacity(dim * dim);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != dim {
                return Err(BoardError::NotSquare {
                    row,
                    len: r.len(),
                    expected: dim,
                });
            }
            tiles.extend_from_slice(r);
        }
        Self::validated(dim, tiles)
    }

    /// Builds a board from a flat row-major tile slice.
    ///
    /// # Errors
    ///
    /// As [`Board::from_rows`], except a length mismatch reports
    /// [`BoardError::WrongCellCount`] instead of `NotSquare`.
    pub fn from_row_major(dim: usize, tiles: &[u16]) -> Result<Self, BoardError> {
        check_dim(dim)?;
        if tiles.len() != dim * dim {
            return Err(BoardError::WrongCellCount {
                len: tiles.len(),
                expected: dim * dim,
            });
        }
        Self::validated(dim, tiles.to_vec())
    }

    /// The goal board: tiles ascending in row-major order, blank last.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyBoard`] for `dim == 0` and
    /// [`BoardError::DimensionTooLarge`] beyond [`Board::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin::Board;
    ///
    /// let goal = Board::goal(3).unwrap();
    /// assert!(goal.is_goal());
    /// assert_eq!(goal.to_string(), "3\n 1  2  3\n 4  5  6\n 7  8  0");
    /// ```
    pub fn goal(dim: usize) -> Result<Self, BoardError> {
        check_dim(dim)?;
        let cells = dim * dim;
        let mut tiles: Vec<u16> = (1..cells).map(|v| v as u16).collect();
        tiles.push(0);
        Ok(Self::assemble(dim, tiles))
    }

    /// Permutation check over an already size-checked tile vector.
    fn validated(dim: usize, tiles: Vec<u16>) -> Result<Self, BoardError> {
        let cells = dim * dim;
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let v = tile as usize;
            if v >= cells {
                return Err(BoardError::TileOutOfRange { tile, cells });
            }
            if seen[v] {
                return Err(BoardError::DuplicateTile { tile });
            }
            seen[v] = true;
        }
        Ok(Self::assemble(dim, tiles))
    }

    /// Single scoring pass over a known-valid permutation: locates the blank
    /// and accumulates both heuristics.
    ///
    /// In row-major form the goal cell of tile `v` is index `v - 1`, so a
    /// tile is misplaced exactly when `v - 1 != idx`.
    fn assemble(dim: usize, tiles: Vec<u16>) -> Self {
        let mut blank = 0;
        let mut hamming = 0u32;
        let mut manhattan = 0u32;
        for (idx, &tile) in tiles.iter().enumerate() {
            if tile == 0 {
                blank = idx;
                continue;
            }
            let goal_idx = tile as usize - 1;
            if goal_idx != idx {
                hamming += 1;
            }
            let row_offset = (idx / dim).abs_diff(goal_idx / dim);
            let col_offset = (idx % dim).abs_diff(goal_idx % dim);
            manhattan += (row_offset + col_offset) as u32;
        }
        Board {
            dim,
            tiles,
            blank,
            hamming,
            manhattan,
        }
    }

    /// The tile at `(row, col)`, where `0` is the blank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] when either coordinate reaches
    /// `dim`.
    pub fn tile_at(&self, row: usize, col: usize) -> Result<u16, BoardError> {
        if row >= self.dim || col >= self.dim {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                dim: self.dim,
            });
        }
        Ok(self.tiles[row * self.dim + col])
    }

    /// Total number of cells, N². Not the side length; see
    /// [`dimension`](Board::dimension).
    pub fn size(&self) -> usize {
        self.dim * self.dim
    }

    /// Side length N.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// `(row, col)` of the blank square.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.dim, self.blank % self.dim)
    }

    /// Number of non-blank tiles out of place. Cached at construction; O(1).
    pub fn hamming(&self) -> u32 {
        self.hamming
    }

    /// Sum over all non-blank tiles of the row plus column offset from the
    /// tile's goal cell. Cached at construction; O(1).
    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    /// Number of inversions: pairs of non-blank tiles whose row-major order
    /// disagrees with their value order. Computed on demand in O(N⁴); only
    /// [`is_solvable`](Board::is_solvable) needs it.
    pub fn inversions(&self) -> u32 {
        let mut count = 0u32;
        for (i, &a) in self.tiles.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for &b in &self.tiles[i + 1..] {
                if b != 0 && a > b {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether this board is the goal configuration.
    ///
    /// Two equivalent readings: every tile sits in its goal cell
    /// (`hamming() == 0`), or the blank occupies the last cell while the
    /// tile sequence carries no inversions.
    pub fn is_goal(&self) -> bool {
        self.hamming == 0
    }

    /// Whether the goal is reachable from this board by legal slides.
    ///
    /// Slides preserve a parity invariant that splits the N²! permutations
    /// into two equal halves, only one of which contains the goal. For odd N
    /// a board is solvable iff its inversion count is even; for even N the
    /// blank's row index joins the count and the sum must be odd.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin::Board;
    ///
    /// // Swapping two adjacent tiles of the goal flips the parity.
    /// let twisted = Board::from_rows(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
    /// assert!(!twisted.is_solvable());
    /// ```
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.dim % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = (self.blank / self.dim) as u32;
            (blank_row + inversions) % 2 == 1
        }
    }

    /// Slides the blank one cell in `dir`, producing the resulting board.
    ///
    /// Returns `None` when the move would leave the grid; any in-bounds
    /// orthogonal slide is legal, the boundary check is the only gate. The
    /// new board is scored afresh, so its cached heuristics are correct.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin::{Board, Direction};
    ///
    /// let goal = Board::goal(3).unwrap();
    /// let moved = goal.slide(Direction::North).unwrap();
    /// assert_eq!(moved.manhattan(), 1);
    /// assert_eq!(moved.slide(Direction::South).unwrap(), goal);
    /// assert_eq!(goal.slide(Direction::East), None);
    /// ```
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let (row, col) = self.blank();
        let (dr, dc) = dir.offset();
        let target_row = row as i32 + dr;
        let target_col = col as i32 + dc;
        let n = self.dim as i32;
        if target_row < 0 || target_row >= n || target_col < 0 || target_col >= n {
            return None;
        }
        let target = target_row as usize * self.dim + target_col as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board::assemble(self.dim, tiles))
    }

    /// All boards one legal slide away, in north, east, south, west order.
    ///
    /// A corner blank yields two boards, another edge blank three, an
    /// interior blank four; a 1×1 board has none. The inline capacity covers
    /// the maximum, so the buffer never touches the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin::Board;
    ///
    /// // The goal's blank sits in the bottom-right corner.
    /// assert_eq!(Board::goal(3).unwrap().neighbours().len(), 2);
    /// ```
    pub fn neighbours(&self) -> SmallVec<[Board; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.slide(dir))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dim)?;
        for row in 0..self.dim {
            writeln!(f)?;
            for col in 0..self.dim {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:2}", self.tiles[row * self.dim + col])?;
            }
        }
        Ok(())
    }
}

/// Dimension gate shared by every constructor, applied before any allocation.
fn check_dim(dim: usize) -> Result<(), BoardError> {
    if dim == 0 {
        return Err(BoardError::EmptyBoard);
    }
    if dim > Board::MAX_DIM {
        return Err(BoardError::DimensionTooLarge {
            dim,
            max: Board::MAX_DIM,
        });
    }
    Ok(())
}
