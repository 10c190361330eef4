//! Immutable boards for the sliding-tile puzzle (the 8-puzzle and its N×N
//! generalizations).
//!
//! A [`Board`] stores one placement of the tiles `1..N²-1` plus the blank,
//! caches its [Hamming](Board::hamming) and [Manhattan](Board::manhattan)
//! distances to the goal at construction, enumerates the boards one legal
//! slide away, and answers the parity-based solvability question without
//! searching. Boards are plain immutable values: hashable, ordered, and
//! cheap to clone, which is what a search frontier and its visited set need.
//!
//! No solver is included. This crate is the state type a solver is built on.
//!
//! # Quick start
//!
//! ```
//! use taquin::{Board, Direction};
//!
//! let start = Board::from_rows(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
//! assert_eq!(start.hamming(), 5);
//! assert_eq!(start.manhattan(), 10);
//! assert!(start.is_solvable());
//!
//! // The blank sits in the interior, so all four slides are legal.
//! let next = start.neighbours();
//! assert_eq!(next.len(), 4);
//! assert_eq!(next[0], start.slide(Direction::North).unwrap());
//!
//! assert!(Board::goal(3).unwrap().is_goal());
//! ```
//!
//! # Determinism
//!
//! [`scramble()`] walks from the goal with a seeded [`rand_chacha::ChaCha8Rng`]:
//! the same `(dim, moves, seed)` arguments produce the same board on every
//! platform.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod direction;
pub mod error;
pub mod scramble;

pub use board::Board;
pub use direction::Direction;
pub use error::BoardError;
pub use scramble::scramble;
