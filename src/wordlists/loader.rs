//! Word data loading utilities
//!
//! Word set files hold one `WORD:Hint` entry per line. Accepted-word files
//! hold one word per line. In both, blank lines and lines starting with `#`
//! are skipped. Words are not validated here; [`GameConfig`] does that when
//! the session is configured.
//!
//! [`GameConfig`]: crate::session::GameConfig

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error reading a word data file
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    MissingHint { line: usize, text: String },
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to read {}: {source}", path.display()),
            Self::MissingHint { line, text } => {
                write!(f, "Line {line} '{text}' is not in WORD:Hint form")
            }
            Self::Empty => write!(f, "No entries found"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn content_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse `WORD:Hint` entries, keeping file order
///
/// # Errors
///
/// Returns `LoadError::MissingHint` for a line without a `:` separator and
/// `LoadError::Empty` if no entries remain.
///
/// # Examples
/// ```
/// use hinted_wordle::wordlists::loader::parse_word_set;
///
/// let entries = parse_word_set("# trip\nDATES: DFW\nfirst:London\n").unwrap();
/// assert_eq!(entries[0], ("DATES".to_string(), "DFW".to_string()));
/// assert_eq!(entries.len(), 2);
/// ```
pub fn parse_word_set(content: &str) -> Result<Vec<(String, String)>, LoadError> {
    let entries = content_lines(content)
        .map(|(line, text)| {
            text.split_once(':')
                .map(|(word, hint)| (word.trim().to_string(), hint.trim().to_string()))
                .ok_or_else(|| LoadError::MissingHint {
                    line,
                    text: text.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if entries.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(entries)
}

/// Load a word set file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_word_set`].
///
/// # Examples
/// ```no_run
/// use hinted_wordle::wordlists::loader::load_word_set;
///
/// let entries = load_word_set("data/words.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_word_set<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>, LoadError> {
    parse_word_set(&read(path.as_ref())?)
}

/// Parse an accepted-word list
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content_lines(content)
        .map(|(_, word)| word.to_string())
        .collect()
}

/// Load an accepted-word list file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    Ok(parse_word_list(&read(path.as_ref())?))
}
