//! Benchmark inputs for the taquin puzzle-board crate.
//!
//! The criterion benches need large deterministic permutations. A slide walk
//! via [`taquin::scramble()`] costs O(cells) per move, which is too slow for
//! seeding a 100×100 board, so this helper shuffles the flat tile vector in
//! place with a seeded RNG instead. The result is a valid board but not
//! necessarily a solvable one; scoring and inversion-count benches do not
//! care.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic permutation of `0..dim²`, row-major.
///
/// The same `(dim, seed)` arguments produce the same tiles on every
/// platform.
pub fn shuffled_tiles(dim: usize, seed: u64) -> Vec<u16> {
    let cells = dim * dim;
    let mut tiles: Vec<u16> = (0..cells).map(|v| v as u16).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tiles.shuffle(&mut rng);
    tiles
}
