//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI. Reads one guess per line.

use crate::output::{
    print_board, print_completion, print_failure, print_notice, print_word_header,
    print_word_solved,
};
use crate::session::{Phase, Session, SubmitOutcome};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// How a simple-mode game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleSummary {
    pub phase: Phase,
    pub solved: usize,
    pub total: usize,
    pub guesses_recorded: usize,
    pub rejected: usize,
    pub quit: bool,
}

/// Run the simple interactive CLI mode until the session ends or input runs out
///
/// Solved words advance immediately; there is no display delay in this mode.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: BufRead>(
    session: &mut Session,
    mut reader: R,
) -> Result<SimpleSummary, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Hinted Wordle - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess each {}-letter word in {} tries. Type 'quit' to exit.",
        session.config().word_length(),
        session.config().max_attempts()
    );

    let mut guesses_recorded = 0;
    let mut rejected = 0;
    let mut quit = false;

    print_word_header(&session.snapshot());

    while session.phase() == Phase::Playing {
        let Some(input) = get_user_input("Guess", &mut reader)? else {
            debug!("Input closed");
            quit = true;
            break;
        };

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            quit = true;
            break;
        }

        let outcome = match session.submit_guess(&input) {
            Ok(outcome) => outcome,
            Err(err) => {
                rejected += 1;
                print_notice(err.notice());
                continue;
            }
        };

        if outcome != SubmitOutcome::Ignored {
            guesses_recorded += 1;
        }
        print_board(&session.snapshot());

        match outcome {
            SubmitOutcome::WordSolved { .. } => {
                let solved_in = session.history().len();
                if let Some(last) = session.history().last() {
                    print_word_solved(last.word(), solved_in);
                }
                session.advance_word();
                print_word_header(&session.snapshot());
            }
            SubmitOutcome::AllComplete => print_completion(),
            SubmitOutcome::Failed { target } => print_failure(&target),
            SubmitOutcome::Continue { attempts_left } => {
                println!("{}", format!("{attempts_left} attempts left").dimmed());
            }
            SubmitOutcome::Ignored => {}
        }
    }

    Ok(SimpleSummary {
        phase: session.phase(),
        solved: session.solved_count(),
        total: session.total_words(),
        guesses_recorded,
        rejected,
        quit,
    })
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead>(prompt: &str, reader: &mut R) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
