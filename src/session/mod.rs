//! Session configuration and the game progression state machine
//!
//! [`GameConfig`] validates the word set up front; [`Session`] applies one
//! input event at a time and never leaves its state inconsistent.

mod config;
mod controller;

pub use config::{
    ConfigError, DEFAULT_MAX_ATTEMPTS, Dictionary, DictionaryMode, GameConfig, GameConfigBuilder,
    HintedWord,
};
pub use controller::{
    AdvanceTicket, GuessRecord, Phase, Session, SessionId, SessionSnapshot, SubmitError,
    SubmitOutcome,
};
