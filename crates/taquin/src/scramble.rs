//! Deterministic scrambling by random walk from the goal.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::board::Board;
use crate::direction::Direction;
use crate::error::BoardError;

/// Scrambles a `dim`×`dim` board with a seeded random walk.
///
/// Starts from [`Board::goal`] and applies `moves` legal slides drawn from a
/// `ChaCha8Rng` seeded with `seed`, never immediately undoing the previous
/// slide. The same `(dim, moves, seed)` arguments produce the same board on
/// every platform, and because only legal slides are applied the result is
/// always solvable.
///
/// A 1×1 board has no legal slides and comes back unchanged.
///
/// # Errors
///
/// Propagates the [`Board::goal`] dimension errors.
///
/// # Examples
///
/// ```
/// use taquin::scramble;
///
/// let a = scramble(4, 50, 7).unwrap();
/// let b = scramble(4, 50, 7).unwrap();
/// assert_eq!(a, b);
/// assert!(a.is_solvable());
/// ```
pub fn scramble(dim: usize, moves: usize, seed: u64) -> Result<Board, BoardError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::goal(dim)?;
    let mut last: Option<Direction> = None;

    for _ in 0..moves {
        let mut candidates: SmallVec<[(Direction, Board); 4]> = SmallVec::new();
        for dir in Direction::ALL {
            if last.map(Direction::opposite) == Some(dir) {
                continue;
            }
            if let Some(next) = board.slide(dir) {
                candidates.push((dir, next));
            }
        }
        if candidates.is_empty() {
            break;
        }
        let pick = rng.random_range(0..candidates.len());
        let (dir, next) = candidates.swap_remove(pick);
        board = next;
        last = Some(dir);
    }
    Ok(board)
}
