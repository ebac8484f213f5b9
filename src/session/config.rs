//! Session configuration
//!
//! Everything a session needs is passed in here rather than hardcoded:
//! word length, attempt limit, the ordered word set with hints, and the
//! optional accepted-guess dictionary. Malformed input is rejected when the
//! config is built so play logic never sees it.

use crate::core::{DEFAULT_WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;

/// Default number of guesses allowed per word
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// A target word and the hint shown while it is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintedWord {
    word: Word,
    hint: String,
}

impl HintedWord {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

/// Whether guesses must come from the accepted-word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictionaryMode {
    /// Reject guesses that are neither targets nor accepted words
    #[default]
    Strict,
    /// Any well-formed word is accepted
    Off,
}

impl DictionaryMode {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" | "on" => Some(Self::Strict),
            "off" | "none" => Some(Self::Off),
            _ => None,
        }
    }
}

impl std::str::FromStr for DictionaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown dictionary mode '{s}' (use strict or off)"))
    }
}

impl fmt::Display for DictionaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// Set of words accepted as guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Error building a [`GameConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordSet,
    ZeroWordLength,
    ZeroAttempts,
    InvalidTarget { index: usize, source: WordError },
    DuplicateTarget(Word),
    InvalidAcceptedWord { text: String, source: WordError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordSet => write!(f, "Word set must contain at least one word"),
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroAttempts => write!(f, "Maximum attempts must be at least 1"),
            Self::InvalidTarget { index, source } => {
                write!(f, "Target word #{} is invalid: {source}", index + 1)
            }
            Self::DuplicateTarget(word) => write!(f, "Target word {word} appears more than once"),
            Self::InvalidAcceptedWord { text, source } => {
                write!(f, "Accepted word '{text}' is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTarget { source, .. } | Self::InvalidAcceptedWord { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Validated, immutable game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
    word_set: Vec<HintedWord>,
    dictionary: Option<Dictionary>,
}

impl GameConfig {
    /// Start building a config with the default length and attempt limit
    ///
    /// # Examples
    /// ```
    /// use hinted_wordle::session::GameConfig;
    ///
    /// let config = GameConfig::builder()
    ///     .word("dates", "DFW")
    ///     .word("first", "London")
    ///     .max_attempts(4)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.word_set().len(), 2);
    /// assert_eq!(config.max_attempts(), 4);
    /// ```
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Target words in play order
    #[must_use]
    pub fn word_set(&self) -> &[HintedWord] {
        &self.word_set
    }

    /// Accepted-guess dictionary, `None` when the gate is off
    #[must_use]
    pub const fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    #[must_use]
    pub const fn dictionary_mode(&self) -> DictionaryMode {
        if self.dictionary.is_some() {
            DictionaryMode::Strict
        } else {
            DictionaryMode::Off
        }
    }

    /// Whether the dictionary gate lets `word` through
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.dictionary.as_ref().is_none_or(|d| d.contains(word))
    }
}

/// Builder for [`GameConfig`]
#[derive(Debug, Clone)]
pub struct GameConfigBuilder {
    word_length: usize,
    max_attempts: usize,
    entries: Vec<(String, String)>,
    accepted: Vec<String>,
    dictionary_mode: DictionaryMode,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            entries: Vec::new(),
            accepted: Vec::new(),
            dictionary_mode: DictionaryMode::Off,
        }
    }
}

impl GameConfigBuilder {
    /// Append a target word and its hint
    #[must_use]
    pub fn word(mut self, word: impl Into<String>, hint: impl Into<String>) -> Self {
        self.entries.push((word.into(), hint.into()));
        self
    }

    /// Append several target words with hints
    #[must_use]
    pub fn words<I, W, H>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, H)>,
        W: Into<String>,
        H: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(w, h)| (w.into(), h.into())));
        self
    }

    #[must_use]
    pub const fn word_length(mut self, length: usize) -> Self {
        self.word_length = length;
        self
    }

    #[must_use]
    pub const fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Enable the dictionary gate with these extra accepted words
    ///
    /// Target words are always accepted and need not be listed.
    #[must_use]
    pub fn dictionary<I, S>(mut self, accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted.extend(accepted.into_iter().map(Into::into));
        self.dictionary_mode = DictionaryMode::Strict;
        self
    }

    #[must_use]
    pub const fn dictionary_mode(mut self, mode: DictionaryMode) -> Self {
        self.dictionary_mode = mode;
        self
    }

    /// Validate and build the config
    ///
    /// # Errors
    /// Returns `ConfigError` if the word set is empty, a target or accepted
    /// word does not match the word length, a target repeats, or either limit
    /// is zero.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.entries.is_empty() {
            return Err(ConfigError::EmptyWordSet);
        }

        let mut seen = FxHashSet::default();
        let mut word_set = Vec::with_capacity(self.entries.len());
        for (index, (text, hint)) in self.entries.into_iter().enumerate() {
            let word = Word::with_length(&text, self.word_length)
                .map_err(|source| ConfigError::InvalidTarget { index, source })?;
            if !seen.insert(word.clone()) {
                return Err(ConfigError::DuplicateTarget(word));
            }
            word_set.push(HintedWord {
                word,
                hint: hint.trim().to_string(),
            });
        }

        let dictionary = match self.dictionary_mode {
            DictionaryMode::Off => None,
            DictionaryMode::Strict => {
                let mut words = seen;
                for text in self.accepted {
                    let word = Word::with_length(&text, self.word_length).map_err(|source| {
                        ConfigError::InvalidAcceptedWord {
                            text: text.clone(),
                            source,
                        }
                    })?;
                    words.insert(word);
                }
                Some(Dictionary { words })
            }
        };

        Ok(GameConfig {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
            word_set,
            dictionary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn builder_defaults() {
        let config = GameConfig::builder().word("dates", " DFW ").build().unwrap();

        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_attempts(), 6);
        assert_eq!(config.word_set()[0].word().text(), "DATES");
        assert_eq!(config.word_set()[0].hint(), "DFW");
        assert_eq!(config.dictionary_mode(), DictionaryMode::Off);
        assert!(config.accepts(&word("ZZZZZ")));
    }

    #[test]
    fn word_set_keeps_insertion_order() {
        let config = GameConfig::builder()
            .words([("STARS", "West Texas"), ("DATES", "DFW"), ("MARRY", "New York")])
            .build()
            .unwrap();

        let order: Vec<&str> = config.word_set().iter().map(|h| h.word().text()).collect();
        assert_eq!(order, vec!["STARS", "DATES", "MARRY"]);
    }

    #[test]
    fn rejects_empty_word_set() {
        assert_eq!(
            GameConfig::builder().build().unwrap_err(),
            ConfigError::EmptyWordSet
        );
    }

    #[test]
    fn rejects_zero_limits() {
        let zero_len = GameConfig::builder().word("a", "").word_length(0).build();
        assert_eq!(zero_len.unwrap_err(), ConfigError::ZeroWordLength);

        let zero_attempts = GameConfig::builder().word("dates", "").max_attempts(0).build();
        assert_eq!(zero_attempts.unwrap_err(), ConfigError::ZeroAttempts);
    }

    #[test]
    fn rejects_target_with_wrong_length() {
        let err = GameConfig::builder()
            .word("dates", "DFW")
            .word("london", "UK")
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidTarget {
                index: 1,
                source: WordError::InvalidLength {
                    expected: 5,
                    actual: 6
                }
            }
        );
        assert_eq!(
            err.to_string(),
            "Target word #2 is invalid: Word must be exactly 5 letters, got 6"
        );
    }

    #[test]
    fn rejects_targets_and_accepted_words_that_fold_longer() {
        let err = GameConfig::builder()
            .word("ßtars", "West Texas")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTarget {
                index: 0,
                source: WordError::NonAscii
            }
        );

        let err = GameConfig::builder()
            .word("kneel", "Maibara")
            .dictionary(["ßtars"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAcceptedWord {
                text: "ßtars".to_string(),
                source: WordError::NonAscii
            }
        );
    }

    #[test]
    fn rejects_duplicate_target() {
        let err = GameConfig::builder()
            .word("dates", "DFW")
            .word("DATES", "again")
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateTarget(word("DATES")));
    }

    #[test]
    fn custom_word_length() {
        let config = GameConfig::builder()
            .word("cat", "pet")
            .word_length(3)
            .build()
            .unwrap();
        assert_eq!(config.word_length(), 3);
    }

    #[test]
    fn strict_dictionary_includes_targets() {
        let config = GameConfig::builder()
            .word("kneel", "Maibara")
            .dictionary(["crane", "level"])
            .build()
            .unwrap();

        assert_eq!(config.dictionary_mode(), DictionaryMode::Strict);
        assert!(config.accepts(&word("KNEEL")));
        assert!(config.accepts(&word("LEVEL")));
        assert!(!config.accepts(&word("QWERT")));
        assert_eq!(config.dictionary().unwrap().len(), 3);
    }

    #[test]
    fn strict_dictionary_rejects_bad_entries() {
        let err = GameConfig::builder()
            .word("kneel", "Maibara")
            .dictionary(["cranes"])
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAcceptedWord { .. }));
    }

    #[test]
    fn dictionary_mode_can_be_switched_off() {
        let config = GameConfig::builder()
            .word("kneel", "Maibara")
            .dictionary(["crane"])
            .dictionary_mode(DictionaryMode::Off)
            .build()
            .unwrap();
        assert!(config.dictionary().is_none());
    }

    #[test]
    fn dictionary_mode_parsing() {
        assert_eq!("strict".parse::<DictionaryMode>(), Ok(DictionaryMode::Strict));
        assert_eq!("OFF".parse::<DictionaryMode>(), Ok(DictionaryMode::Off));
        assert!("maybe".parse::<DictionaryMode>().is_err());
        assert_eq!(DictionaryMode::Strict.to_string(), "strict");
    }
}
