//! Valid-answer corpus and word utility scores
//!
//! A `Lexicon` is loaded once and then shared read-only by every game
//! session, including sessions running on other threads.

mod embedded;
pub mod loader;

pub use embedded::{CORPUS, CORPUS_COUNT, WORD_SCORES};
pub use loader::LexiconError;

use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

use crate::core::{WORD_LENGTH, Word};

/// Read-only word list plus utility table
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    valid: FxHashSet<[u8; WORD_LENGTH]>,
    scores: FxHashMap<[u8; WORD_LENGTH], f64>,
}

impl Lexicon {
    /// Build a lexicon from words and `(word, score)` pairs
    ///
    /// Duplicate words keep their first position; a later score for the same
    /// word replaces an earlier one. Scored words that are not in `words` are
    /// kept in the table but never ranked.
    pub fn new(
        words: impl IntoIterator<Item = Word>,
        scores: impl IntoIterator<Item = (Word, f64)>,
    ) -> Self {
        let mut valid = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| valid.insert(*w.chars()))
            .collect();
        let scores = scores
            .into_iter()
            .map(|(w, score)| (*w.chars(), score))
            .collect();

        Self {
            words,
            valid,
            scores,
        }
    }

    /// The corpus and score table compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(CORPUS), embedded_scores())
    }

    /// Load from files, falling back to the embedded data for whichever is `None`
    ///
    /// # Errors
    /// Returns `LexiconError` if a given file cannot be read or parsed.
    pub fn load(corpus: Option<&Path>, scores: Option<&Path>) -> Result<Self, LexiconError> {
        let words = match corpus {
            Some(path) => loader::load_words(path)?,
            None => loader::words_from_slice(CORPUS),
        };
        let scores = match scores {
            Some(path) => loader::load_scores(path)?,
            None => embedded_scores().collect(),
        };

        let lexicon = Self::new(words, scores);
        info!(
            "lexicon loaded: {} words, {} scores",
            lexicon.len(),
            lexicon.scores.len()
        );
        Ok(lexicon)
    }

    /// Every valid answer, in corpus order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is this letter sequence a valid answer?
    #[inline]
    #[must_use]
    pub fn contains(&self, letters: &[u8; WORD_LENGTH]) -> bool {
        self.valid.contains(letters)
    }

    /// Utility score, if the table has one for this word
    #[inline]
    #[must_use]
    pub fn score(&self, letters: &[u8; WORD_LENGTH]) -> Option<f64> {
        self.scores.get(letters).copied()
    }

    /// Utility score, 0 for words missing from the table
    #[inline]
    #[must_use]
    pub fn score_or_default(&self, letters: &[u8; WORD_LENGTH]) -> f64 {
        self.score(letters).unwrap_or(0.0)
    }
}

fn embedded_scores() -> impl Iterator<Item = (Word, f64)> {
    WORD_SCORES
        .iter()
        .filter_map(|&(w, score)| Word::new(w).ok().map(|w| (w, score)))
}
