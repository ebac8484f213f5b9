//! Hinted Wordle
//!
//! Play through an ordered sequence of hidden words, each with a hint, in the
//! classic guess-and-feedback style.
//!
//! # Quick Start
//!
//! ```rust
//! use hinted_wordle::session::{GameConfig, Session, SubmitOutcome};
//!
//! let config = GameConfig::builder()
//!     .word("kneel", "Maibara")
//!     .build()
//!     .unwrap();
//! let mut session = Session::new(config);
//!
//! let outcome = session.submit_guess("level").unwrap();
//! assert_eq!(outcome, SubmitOutcome::Continue { attempts_left: 5 });
//! println!("{}", session.history()[0].feedback().to_emoji());
//! ```

// Core domain types
pub mod core;

// Game progression state machine
pub mod session;

// Word sets and accepted lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
