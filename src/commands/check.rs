//! One-off guess evaluation command
//!
//! Scores a single guess against a target without starting a session.

use crate::core::{Feedback, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or the guess length differs
/// from the target length.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::with_length(guess, target.len())?;
    let feedback = Feedback::evaluate(&target, &guess);

    Ok(CheckResult {
        target,
        guess,
        feedback,
    })
}
