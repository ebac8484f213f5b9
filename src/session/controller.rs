//! Game progression state machine
//!
//! A [`Session`] owns all mutable game state for one play-through. Hosts feed
//! it input events and read back a [`SessionSnapshot`] to render.

use super::config::{GameConfig, HintedWord};
use crate::core::{Feedback, LetterStatus, Word, WordError};
use log::{debug, info};
use std::collections::BTreeSet;
use std::fmt;

/// Random identity of a session, used to detect stale delayed actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Overall progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input for the active word
    Playing,
    /// Active word just solved; waiting for [`Session::advance_word`]
    WordSolved,
    /// Every word solved (terminal)
    AllComplete,
    /// Attempts exhausted on the active word (terminal)
    Failed,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::AllComplete | Self::Failed)
    }
}

/// A submitted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// A guess the session refused to record
///
/// None of these end the session; the guess is discarded and state is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacters,
    UnknownWord(Word),
}

impl SubmitError {
    /// Short notice suitable for a transient on-screen message
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::InvalidLength { expected, actual } if actual < expected => "Not enough letters",
            Self::InvalidLength { .. } => "Too many letters",
            Self::InvalidCharacters => "Letters only",
            Self::UnknownWord(_) => "Not in word list",
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::InvalidCharacters => write!(f, "Guess must contain only letters A-Z"),
            Self::UnknownWord(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// What a recorded (or ignored) submission did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session was not accepting input; nothing changed
    Ignored,
    /// Guess recorded, still playing the same word
    Continue { attempts_left: usize },
    /// Guess solved the active word; more words remain
    WordSolved { index: usize },
    /// Guess solved the last remaining word
    AllComplete,
    /// Guess used the final attempt without solving; target revealed
    Failed { target: Word },
}

/// Permission to run one delayed word advance
///
/// Bound to the session and word it was issued for, so an advance scheduled
/// before a restart (or for an earlier word) is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    session: SessionId,
    word_index: usize,
}

/// Read-only view of the session for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub phase: Phase,
    pub hint: String,
    pub active_index: usize,
    pub solved_count: usize,
    pub total_words: usize,
    pub history: Vec<GuessRecord>,
    pub candidate: String,
    pub letter_status: LetterStatus,
    pub word_length: usize,
    pub max_attempts: usize,
    /// Active target, only present once the session has failed
    pub revealed: Option<Word>,
}

/// One play-through of a word set
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    config: GameConfig,
    active: usize,
    solved: BTreeSet<usize>,
    history: Vec<GuessRecord>,
    candidate: String,
    letter_status: LetterStatus,
    phase: Phase,
}

impl Session {
    /// Start a new session on the first word of the config
    ///
    /// # Examples
    /// ```
    /// use hinted_wordle::session::{GameConfig, Phase, Session, SubmitOutcome};
    ///
    /// let config = GameConfig::builder().word("dates", "DFW").build().unwrap();
    /// let mut session = Session::new(config);
    ///
    /// assert_eq!(session.hint(), "DFW");
    /// assert_eq!(session.submit_guess("dates"), Ok(SubmitOutcome::AllComplete));
    /// assert_eq!(session.phase(), Phase::AllComplete);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let id = SessionId(rand::random());
        info!(
            "Session {} started with {} words",
            id.0,
            config.word_set().len()
        );

        Self {
            id,
            config,
            active: 0,
            solved: BTreeSet::new(),
            history: Vec::new(),
            candidate: String::new(),
            letter_status: LetterStatus::new(),
            phase: Phase::Playing,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    fn active_entry(&self) -> &HintedWord {
        &self.config.word_set()[self.active]
    }

    /// Hint for the active word
    #[must_use]
    pub fn hint(&self) -> &str {
        self.active_entry().hint()
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.config.word_set().len()
    }

    /// Guesses made on the active word, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// In-progress text typed for the next guess
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    #[must_use]
    pub const fn letter_status(&self) -> &LetterStatus {
        &self.letter_status
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.history.len())
    }

    /// The active target, only once the session has failed
    #[must_use]
    pub fn revealed_word(&self) -> Option<&Word> {
        (self.phase == Phase::Failed).then(|| self.active_entry().word())
    }

    /// Submit a guess for the active word
    ///
    /// Checks run in a fixed order: phase, length, characters, dictionary.
    /// A rejected guess is never recorded and never touches letter status.
    ///
    /// # Errors
    /// Returns `SubmitError` when the guess is the wrong length, contains
    /// non-letters, or is missing from an enabled dictionary.
    pub fn submit_guess(&mut self, text: &str) -> Result<SubmitOutcome, SubmitError> {
        if self.phase != Phase::Playing {
            debug!("Ignoring submission while {:?}", self.phase);
            return Ok(SubmitOutcome::Ignored);
        }

        let guess = Word::with_length(text, self.config.word_length()).map_err(|e| {
            let err = match e {
                WordError::InvalidLength { expected, actual } => {
                    SubmitError::InvalidLength { expected, actual }
                }
                WordError::Empty => SubmitError::InvalidLength {
                    expected: self.config.word_length(),
                    actual: 0,
                },
                WordError::NonAscii | WordError::InvalidCharacters => {
                    SubmitError::InvalidCharacters
                }
            };
            debug!("Rejected guess {text:?}: {err}");
            err
        })?;

        if !self.config.accepts(&guess) {
            debug!("Rejected guess {guess}: not in dictionary");
            return Err(SubmitError::UnknownWord(guess));
        }

        let target = self.active_entry().word().clone();
        let feedback = Feedback::evaluate(&target, &guess);
        debug!(
            "Word {} guess {}: {guess} -> {feedback}",
            self.active + 1,
            self.history.len() + 1
        );

        self.letter_status.record(&guess, &feedback);
        self.history.push(GuessRecord {
            word: guess.clone(),
            feedback,
        });
        self.candidate.clear();

        if guess == target {
            self.solved.insert(self.active);
            if self.solved.len() == self.total_words() {
                info!("All {} words solved", self.total_words());
                self.phase = Phase::AllComplete;
                return Ok(SubmitOutcome::AllComplete);
            }
            info!(
                "Word {} solved in {} guesses",
                self.active + 1,
                self.history.len()
            );
            self.phase = Phase::WordSolved;
            return Ok(SubmitOutcome::WordSolved { index: self.active });
        }

        if self.history.len() >= self.config.max_attempts() {
            info!("Out of attempts on word {}", self.active + 1);
            self.phase = Phase::Failed;
            return Ok(SubmitOutcome::Failed { target });
        }

        Ok(SubmitOutcome::Continue {
            attempts_left: self.attempts_remaining(),
        })
    }

    /// Submit the in-progress candidate text
    ///
    /// The candidate is cleared only when the guess is recorded.
    ///
    /// # Errors
    /// Same as [`Session::submit_guess`].
    pub fn submit_candidate(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let text = self.candidate.clone();
        self.submit_guess(&text)
    }

    /// Append a letter to the candidate text
    ///
    /// Returns false (and does nothing) unless playing, the candidate has
    /// room, and `c` is an ASCII letter.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.phase != Phase::Playing
            || self.candidate.len() >= self.config.word_length()
            || !c.is_ascii_alphabetic()
        {
            return false;
        }
        self.candidate.push(c.to_ascii_uppercase());
        true
    }

    /// Remove the last candidate letter; false if there was nothing to remove
    pub fn backspace(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.candidate.pop().is_some()
    }

    /// Move from a solved word to the next one
    ///
    /// Only acts in [`Phase::WordSolved`]; returns false otherwise, so a
    /// duplicate or late call cannot skip a word.
    pub fn advance_word(&mut self) -> bool {
        if self.phase != Phase::WordSolved {
            debug!("Ignoring advance while {:?}", self.phase);
            return false;
        }
        // WordSolved is only entered with unsolved words remaining, and the
        // set only holds a prefix of the word set
        let Some(next) = (self.active + 1..self.total_words()).find(|i| !self.solved.contains(i))
        else {
            self.phase = Phase::AllComplete;
            return false;
        };

        self.active = next;
        self.history.clear();
        self.candidate.clear();
        self.letter_status.clear();
        self.phase = Phase::Playing;
        info!("Advanced to word {} of {}", next + 1, self.total_words());
        true
    }

    /// Ticket for a delayed [`Session::advance_with`], if a word was just solved
    #[must_use]
    pub fn schedule_advance(&self) -> Option<AdvanceTicket> {
        (self.phase == Phase::WordSolved).then_some(AdvanceTicket {
            session: self.id,
            word_index: self.active,
        })
    }

    /// Run a previously scheduled advance
    ///
    /// Refuses tickets from another session or for a word that is no longer
    /// the solved active word.
    pub fn advance_with(&mut self, ticket: AdvanceTicket) -> bool {
        if ticket.session != self.id || ticket.word_index != self.active {
            debug!("Dropping stale advance ticket {ticket:?}");
            return false;
        }
        self.advance_word()
    }

    /// Full state for rendering
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            phase: self.phase,
            hint: self.hint().to_string(),
            active_index: self.active,
            solved_count: self.solved_count(),
            total_words: self.total_words(),
            history: self.history.clone(),
            candidate: self.candidate.clone(),
            letter_status: self.letter_status.clone(),
            word_length: self.config.word_length(),
            max_attempts: self.config.max_attempts(),
            revealed: self.revealed_word().cloned(),
        }
    }
}
