//! Core domain types for the word game
//!
//! This module holds the pure evaluation logic with no I/O.
//! All types here are deterministic and cheap to test in isolation.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, Verdict, evaluate};
pub use letters::LetterStatus;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
