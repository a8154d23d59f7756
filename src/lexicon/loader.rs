//! Lexicon loading utilities
//!
//! Parses the newline-delimited corpus and the `word: score` utility table,
//! either from files or from the embedded constants.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{Word, WordError};

/// Problems reading a corpus or score table
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {source}")]
    BadWord {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("line {line}: expected 'word: score', got {text:?}")]
    MissingSeparator { line: usize, text: String },
    #[error("line {line}: score {text:?} is not a finite number")]
    BadScore { line: usize, text: String },
}

/// Parse one 5-letter word per line, skipping blank lines
///
/// # Errors
/// Returns `LexiconError::BadWord` naming the first line that is not a
/// 5-letter word.
///
/// # Examples
/// ```
/// use wordle_csp::lexicon::loader::parse_words;
///
/// let words = parse_words("crane\n\nslate\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(parse_words("crane\ntoolong\n").is_err());
/// ```
pub fn parse_words(text: &str) -> Result<Vec<Word>, LexiconError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Word::new(line).map_err(|source| LexiconError::BadWord { line: i + 1, source }))
        .collect()
}

/// Parse `word: score` lines into numeric scores
///
/// Entries whose key is not a 5-letter word can never match a candidate and
/// are skipped.
///
/// # Errors
/// Returns `LexiconError` for a line without a colon or with a score that
/// is not a finite number.
pub fn parse_scores(text: &str) -> Result<Vec<(Word, f64)>, LexiconError> {
    let mut scores = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| LexiconError::MissingSeparator {
                line: i + 1,
                text: line.to_string(),
            })?;

        let value = value.trim();
        let bad_score = || LexiconError::BadScore {
            line: i + 1,
            text: value.to_string(),
        };
        let score: f64 = value.parse().map_err(|_| bad_score())?;
        // NaN and infinities would break the descending sort
        if !score.is_finite() {
            return Err(bad_score());
        }

        match Word::new(key) {
            Ok(word) => scores.push((word, score)),
            Err(e) => debug!("skipping score for {key:?} on line {}: {e}", i + 1),
        }
    }

    Ok(scores)
}

/// Load a corpus file
///
/// # Errors
/// Returns `LexiconError` if the file cannot be read or a line is not a word.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LexiconError> {
    parse_words(&read(path.as_ref())?)
}

/// Load a `word: score` file
///
/// # Errors
/// Returns `LexiconError` if the file cannot be read or a line is malformed.
pub fn load_scores<P: AsRef<Path>>(path: P) -> Result<Vec<(Word, f64)>, LexiconError> {
    parse_scores(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_csp::lexicon::loader::words_from_slice;
/// use wordle_csp::lexicon::CORPUS;
///
/// let words = words_from_slice(CORPUS);
/// assert_eq!(words.len(), CORPUS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
