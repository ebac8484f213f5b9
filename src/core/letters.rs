//! Best-verdict-so-far per letter, used to color the keyboard

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// Letter status aggregated across the guesses for one target word
///
/// A letter's status only ever upgrades (`Absent` -> `Present` -> `Correct`).
/// The map is a cache: replaying the same guesses through
/// [`LetterStatus::from_history`] always rebuilds an equal value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatus {
    statuses: FxHashMap<u8, Verdict>,
}

impl LetterStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the map by replaying guesses in order
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        let mut status = Self::new();
        for (word, feedback) in history {
            status.record(word, feedback);
        }
        status
    }

    /// Fold one evaluated guess into the map
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            self.upgrade(letter, verdict);
        }
    }

    /// Write `verdict` for `letter` if it beats the recorded one
    ///
    /// Returns true when the stored status changed.
    pub fn upgrade(&mut self, letter: u8, verdict: Verdict) -> bool {
        let letter = letter.to_ascii_uppercase();
        match self.statuses.get(&letter) {
            Some(&existing) if existing >= verdict => false,
            _ => {
                self.statuses.insert(letter, verdict);
                true
            }
        }
    }

    /// Status for a letter, `None` if it has not been guessed yet
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|b| self.statuses.get(&b).copied())
    }

    /// All seen letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, Verdict)> {
        let mut entries: Vec<(char, Verdict)> = self
            .statuses
            .iter()
            .map(|(&letter, &verdict)| (char::from(letter), verdict))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}
