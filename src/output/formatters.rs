//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Verdict};
use crate::session::GuessRecord;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Shown by hosts once every word is solved
pub const COMPLETION_MESSAGE: &str = "Adventure Always.\n\
    I'm proud to call you my adventure buddy and look forward to all the adventures we will have together.\n\
    Happy 1 Year Anniversary, here's to a lifetime more.";

/// "Solved X of Y words"
#[must_use]
pub fn progress_label(solved: usize, total: usize) -> String {
    format!("Solved {solved} of {total} words")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Color a single letter tile by verdict; `None` is an unused key
#[must_use]
pub fn letter_tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => tile.black().on_green().bold(),
        Some(Verdict::Present) => tile.black().on_yellow().bold(),
        Some(Verdict::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Guess letters as colored tiles followed by the emoji squares
#[must_use]
pub fn guess_line(record: &GuessRecord) -> String {
    let tiles: String = record
        .word()
        .text()
        .chars()
        .zip(record.feedback().verdicts())
        .map(|(letter, &verdict)| letter_tile(letter, Some(verdict)).to_string())
        .collect();
    format!("{tiles}  {}", record.feedback().to_emoji())
}

/// Keyboard rows with each key colored by its letter status
#[must_use]
pub fn keyboard_lines(status: &LetterStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|letter| letter_tile(letter, status.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_label_text() {
        assert_eq!(progress_label(2, 5), "Solved 2 of 5 words");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 5, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(5, 5, 10), "██████████");
    }

    #[test]
    fn progress_bar_partial_and_zero_max() {
        assert_eq!(create_progress_bar(2, 5, 10), "████░░░░░░");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn keyboard_has_three_rows_covering_alphabet() {
        let letters: usize = KEYBOARD_ROWS.iter().map(|r| r.len()).sum();
        assert_eq!(letters, 26);
        assert_eq!(keyboard_lines(&LetterStatus::new()).len(), 3);
    }
}
