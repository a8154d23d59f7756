//! Candidate ranking
//!
//! Keeps the solver's assignments that are real words and orders them by
//! utility score, highest first. Ties keep enumeration order.

use std::fmt;

use super::search::Assignment;
use crate::core::Word;
use crate::lexicon::Lexicon;

/// A valid word with its utility score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    word: Word,
    score: f64,
}

impl RankedCandidate {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Utility score (0 when the word is missing from the score table)
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }
}

impl fmt::Display for RankedCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.word, self.score)
    }
}

/// Streaming filter over solver output
///
/// Assignments are offered one at a time so a large enumeration never has to
/// be materialized; only lexicon words are kept.
pub struct Ranker<'a> {
    lexicon: &'a Lexicon,
    accepted: Vec<RankedCandidate>,
    offered: u64,
}

impl<'a> Ranker<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            accepted: Vec::new(),
            offered: 0,
        }
    }

    /// Keep `assignment` if it is a valid word; returns whether it was kept
    pub fn offer(&mut self, assignment: Assignment) -> bool {
        self.offered += 1;
        let letters = assignment.letters();
        if !self.lexicon.contains(letters) {
            return false;
        }
        self.accepted.push(RankedCandidate {
            word: assignment.to_word(),
            score: self.lexicon.score_or_default(letters),
        });
        true
    }

    /// Number of assignments seen so far
    #[must_use]
    pub const fn offered(&self) -> u64 {
        self.offered
    }

    /// Sort the kept words by descending score
    #[must_use]
    pub fn finish(mut self) -> Vec<RankedCandidate> {
        // stable: equal scores stay in enumeration order
        self.accepted.sort_by(|a, b| b.score.total_cmp(&a.score));
        self.accepted
    }
}

/// Filter `assignments` to lexicon words and order them by utility
///
/// # Examples
/// ```
/// use wordle_csp::core::Word;
/// use wordle_csp::lexicon::Lexicon;
/// use wordle_csp::solver::{Assignment, rank};
///
/// let lexicon = Lexicon::new(
///     [Word::new("crane").unwrap(), Word::new("slate").unwrap()],
///     [(Word::new("slate").unwrap(), 9.0)],
/// );
/// let ranked = rank([*b"crane", *b"qqqqq", *b"slate"].map(Assignment::from), &lexicon);
/// assert_eq!(ranked[0].word().text(), "slate");
/// assert_eq!(ranked[1].word().text(), "crane");
/// assert_eq!(ranked.len(), 2);
/// ```
#[must_use]
pub fn rank<I>(assignments: I, lexicon: &Lexicon) -> Vec<RankedCandidate>
where
    I: IntoIterator<Item = Assignment>,
{
    let mut ranker = Ranker::new(lexicon);
    for assignment in assignments {
        ranker.offer(assignment);
    }
    ranker.finish()
}
