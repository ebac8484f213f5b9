//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess receives a [`Verdict`]:
//! - `Absent` = letter not in the target (after duplicates are used up)
//! - `Present` = letter in the target, wrong position
//! - `Correct` = letter in the correct position
//!
//! Verdicts are ordered `Absent < Present < Correct`, which is the precedence
//! used when aggregating letter status across guesses.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for sharing
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdict sequence for one guess, one verdict per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Implements the two-pass duplicate-letter rule: exact matches consume
    /// their target letter first, then the remaining positions claim any
    /// still-unconsumed occurrence of their letter. Each target letter is
    /// claimed at most once in total, so the number of non-absent verdicts for
    /// a letter never exceeds its count in the target.
    ///
    /// Both words must have the same length; callers validate this.
    ///
    /// # Examples
    /// ```
    /// use hinted_wordle::core::{Feedback, Verdict, Word};
    ///
    /// let target = Word::new("dates").unwrap();
    /// let guess = Word::new("stead").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// assert!(feedback.verdicts().iter().all(|&v| v == Verdict::Present));
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(target.len(), guess.len(), "words must be the same length");

        let mut result = vec![Verdict::Absent; guess.len()];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position, from what is left
        for (i, &letter) in guess.letters().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position verdicts
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `target`; shorthand for [`Feedback::evaluate`]
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Feedback {
    Feedback::evaluate(target, guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn eval(target: &str, guess: &str) -> Feedback {
        evaluate(&Word::new(target).unwrap(), &Word::new(guess).unwrap())
    }

    fn counts(word: &str) -> HashMap<u8, usize> {
        let mut map = HashMap::new();
        for b in word.to_ascii_uppercase().bytes() {
            *map.entry(b).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn identical_words_are_all_correct() {
        for word in ["DATES", "FIRST", "KNEEL", "STARS", "MARRY", "AAAAA"] {
            let feedback = eval(word, word);
            assert!(feedback.is_perfect(), "{word} vs itself");
            assert_eq!(feedback.count_correct(), 5);
        }
    }

    #[test]
    fn anagram_is_all_present() {
        let feedback = eval("DATES", "STEAD");
        assert_eq!(feedback.verdicts(), &[Verdict::Present; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 5);
    }

    #[test]
    fn kneel_vs_level_respects_duplicate_counts() {
        // K N E E L vs L E V E L
        // pass 1: position 3 (E) and 4 (L) correct
        // pass 2: L at 0 finds no spare L, E at 1 claims the spare E
        let feedback = eval("KNEEL", "LEVEL");
        assert_eq!(
            feedback.verdicts(),
            &[
                Verdict::Absent,
                Verdict::Present,
                Verdict::Absent,
                Verdict::Correct,
                Verdict::Correct,
            ]
        );
    }

    #[test]
    fn spare_duplicate_is_claimed_left_to_right() {
        // MARRY keeps one R after the exact match at position 2; the R at
        // position 0 claims it, so the R at position 4 gets nothing
        let feedback = eval("MARRY", "RARER");
        assert_eq!(
            feedback.verdicts(),
            &[
                Verdict::Present,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Absent,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn no_overlap_is_all_absent() {
        let feedback = eval("DATES", "QUIRK");
        assert_eq!(feedback.verdicts(), &[Verdict::Absent; 5]);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn non_absent_count_never_exceeds_target_count() {
        let pairs = [
            ("KNEEL", "LEVEL"),
            ("KNEEL", "EERIE"),
            ("STARS", "SASSY"),
            ("MARRY", "ERROR"),
            ("DATES", "TATTS"),
            ("FIRST", "IIIII"),
            ("STARS", "STARS"),
        ];

        for (target, guess) in pairs {
            let feedback = eval(target, guess);
            let target_counts = counts(target);
            let mut hits: HashMap<u8, usize> = HashMap::new();
            for (letter, verdict) in guess.bytes().zip(feedback.verdicts()) {
                if *verdict != Verdict::Absent {
                    *hits.entry(letter).or_insert(0) += 1;
                }
            }
            for (letter, hit) in hits {
                let allowed = target_counts.get(&letter).copied().unwrap_or(0);
                assert!(
                    hit <= allowed,
                    "{guess} vs {target}: {} has {hit} hits, target has {allowed}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = eval("KNEEL", "LEVEL");
        for _ in 0..10 {
            assert_eq!(eval("KNEEL", "LEVEL"), first);
        }
    }

    #[test]
    fn verdict_precedence_order() {
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
    }

    #[test]
    fn display_codes_and_emoji() {
        let feedback = eval("KNEEL", "LEVEL");
        assert_eq!(feedback.to_string(), "-Y-GG");
        assert_eq!(feedback.to_emoji(), "⬜🟨⬜🟩🟩");
    }
}
