//! Terminal output formatting
//!
//! Display utilities for the line-based modes and shared text helpers.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_completion, print_failure, print_notice,
    print_word_header, print_word_solved,
};
pub use formatters::{COMPLETION_MESSAGE, KEYBOARD_ROWS, progress_label};
