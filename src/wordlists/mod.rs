//! Word sets and accepted-guess lists
//!
//! Provides the embedded default data plus loaders for custom files.

mod embedded;
pub mod loader;

pub use embedded::{ACCEPTED, ACCEPTED_COUNT, DEFAULT_WORD_SET, DEFAULT_WORD_SET_COUNT};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Embedded word set as owned `(word, hint)` pairs
#[must_use]
pub fn default_word_set() -> Vec<(String, String)> {
    DEFAULT_WORD_SET
        .iter()
        .map(|&(word, hint)| (word.to_string(), hint.to_string()))
        .collect()
}

/// Shuffle play order in place; the same seed always gives the same order
pub fn shuffle_word_set<T>(entries: &mut [T], seed: Option<u64>) {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    entries.shuffle(&mut rng);
}
