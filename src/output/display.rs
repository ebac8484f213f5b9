//! Display functions for the line-based modes

use super::formatters::{
    COMPLETION_MESSAGE, create_progress_bar, guess_line, keyboard_lines, letter_tile,
    progress_label,
};
use crate::core::{Feedback, Word};
use crate::session::SessionSnapshot;
use colored::Colorize;

/// Print the hint and progress for the active word
pub fn print_word_header(snapshot: &SessionSnapshot) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word {} of {}   Hint: {}",
        snapshot.active_index + 1,
        snapshot.total_words,
        snapshot.hint.bright_yellow().bold()
    );
    println!(
        "{} [{}]",
        progress_label(snapshot.solved_count, snapshot.total_words),
        create_progress_bar(snapshot.solved_count, snapshot.total_words, 20)
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print every guess so far plus the keyboard
pub fn print_board(snapshot: &SessionSnapshot) {
    println!();
    for (i, record) in snapshot.history.iter().enumerate() {
        println!("{}. {}", i + 1, guess_line(record));
    }
    println!(
        "   {} of {} attempts used",
        snapshot.history.len(),
        snapshot.max_attempts
    );
    println!();
    for line in keyboard_lines(&snapshot.letter_status) {
        println!("{line}");
    }
}

/// Print a transient notice for a rejected guess
pub fn print_notice(notice: &str) {
    println!("{}", format!("⚠ {notice}").red().bold());
}

pub fn print_word_solved(word: &Word, guesses: usize) {
    println!(
        "{}",
        format!("✅ {word} solved in {guesses} guesses!").green().bold()
    );
}

pub fn print_completion() {
    println!("\n{}", "🎉 All words solved! 🎉".green().bold());
    println!("{COMPLETION_MESSAGE}");
}

pub fn print_failure(target: &Word) {
    println!("\n{}", format!("The word was {target}").red().bold());
}

/// Print the result of the `check` command
pub fn print_check_result(target: &Word, guess: &Word, feedback: &Feedback) {
    let tiles: String = guess
        .text()
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, &verdict)| letter_tile(letter, Some(verdict)).to_string())
        .collect();
    println!("{tiles}  {}  ({feedback})", feedback.to_emoji());
    println!(
        "{} correct, {} present against {}",
        feedback.count_correct(),
        feedback.count_present(),
        target.text().dimmed()
    );
}
