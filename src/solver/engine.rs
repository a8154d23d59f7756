//! Constraint engine for one puzzle
//!
//! Holds the five position variables and an append-only log of every
//! constraint derived from feedback so far. Solving derives node-consistent
//! domains from the log and hands them to the backtracking search.

use log::{debug, trace};
use std::fmt;

use super::constraint::{Constraint, constraints_for};
use super::domain::LetterSet;
use super::search::{self, Assignment, SearchLimit, SearchStats, SolveError};
use crate::core::{RoundFeedback, WORD_LENGTH};

/// Why the accumulated constraints cannot be satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contradiction {
    /// No letter is left for a position (1-based)
    EmptyDomain { position: usize },
    /// A letter must appear somewhere but no position accepts it
    UnplaceableLetter { letter: u8 },
    /// More distinct letters are required than there are positions
    TooManyRequired { count: usize },
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyDomain { position } => {
                write!(f, "no letter can occupy position {position}")
            }
            Self::UnplaceableLetter { letter } => write!(
                f,
                "'{}' must appear but no position accepts it",
                char::from(letter)
            ),
            Self::TooManyRequired { count } => {
                write!(f, "{count} distinct letters required in a 5-letter word")
            }
        }
    }
}

/// Five letter variables plus the constraint log
///
/// The log only grows from validated feedback:
///
/// ```compile_fail
/// use wordle_csp::solver::{Constraint, ConstraintEngine};
///
/// let mut engine = ConstraintEngine::new();
/// engine.add(Constraint::Fixed { index: 5, letter: b'a' });
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintEngine {
    domains: [LetterSet; WORD_LENGTH],
    constraints: Vec<Constraint>,
}

impl Default for ConstraintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintEngine {
    /// Every position ranges over `a..=z`, no constraints
    #[must_use]
    pub const fn new() -> Self {
        Self {
            domains: [LetterSet::ALPHABET; WORD_LENGTH],
            constraints: Vec::new(),
        }
    }

    /// Append a constraint to the log
    ///
    /// Returns `false` when an identical constraint is already present, in
    /// which case nothing changes. A fixed letter also shrinks the stored
    /// domain of its position. Constraints reach the log only through
    /// [`apply`](Self::apply), so positions are always in range.
    pub(crate) fn add(&mut self, constraint: Constraint) -> bool {
        if self.constraints.contains(&constraint) {
            return false;
        }
        if let Constraint::Fixed { index, letter } = constraint {
            self.domains[index] = self.domains[index].intersection(LetterSet::single(letter));
        }
        trace!("constraint added: {constraint}");
        self.constraints.push(constraint);
        true
    }

    /// Add every constraint implied by one round of feedback
    ///
    /// Returns how many new constraints entered the log.
    pub fn apply(&mut self, feedback: &RoundFeedback) -> usize {
        let added = constraints_for(feedback)
            .into_iter()
            .filter(|&c| self.add(c))
            .count();
        debug!(
            "applied {feedback}: {added} new constraints, {} total",
            self.constraints.len()
        );
        added
    }

    /// The constraint log, oldest first
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Stored variable domains (only narrowed by fixed letters)
    #[must_use]
    pub const fn domains(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.domains
    }

    /// Domains after removing every letter excluded globally or at that position
    #[must_use]
    pub fn effective_domains(&self) -> [LetterSet; WORD_LENGTH] {
        let mut domains = self.domains;
        for constraint in &self.constraints {
            match *constraint {
                Constraint::Excluded { letter } => {
                    for domain in &mut domains {
                        *domain = domain.without(letter);
                    }
                }
                Constraint::NotAt { index, letter } => {
                    domains[index] = domains[index].without(letter);
                }
                Constraint::Fixed { .. } | Constraint::Required { .. } => {}
            }
        }
        domains
    }

    /// Letters that must appear somewhere in the word
    #[must_use]
    pub fn required_letters(&self) -> LetterSet {
        self.constraints
            .iter()
            .filter_map(|c| match *c {
                Constraint::Required { letter } => Some(letter),
                _ => None,
            })
            .collect()
    }

    /// Look for a contradiction that makes the log unsatisfiable before searching
    ///
    /// `None` does not guarantee a solution exists, only that no obvious
    /// conflict was found.
    #[must_use]
    pub fn contradiction(&self) -> Option<Contradiction> {
        let domains = self.effective_domains();
        if let Some(i) = domains.iter().position(|d| d.is_empty()) {
            return Some(Contradiction::EmptyDomain { position: i + 1 });
        }

        let required = self.required_letters();
        if required.len() > WORD_LENGTH {
            return Some(Contradiction::TooManyRequired {
                count: required.len(),
            });
        }

        let reachable = domains.iter().fold(LetterSet::EMPTY, |acc, &d| acc.union(d));
        required
            .difference(reachable)
            .iter()
            .next()
            .map(|letter| Contradiction::UnplaceableLetter { letter })
    }

    /// Enumerate every assignment satisfying the whole log, in lexicographic order
    ///
    /// # Errors
    /// Returns `SolveError` if `limit` is hit before the enumeration finishes.
    pub fn solve<F>(&self, limit: SearchLimit, visit: F) -> Result<SearchStats, SolveError>
    where
        F: FnMut(Assignment),
    {
        let stats = search::enumerate(
            &self.effective_domains(),
            self.required_letters(),
            limit,
            visit,
        )?;
        debug!(
            "solved {} constraints: {} nodes, {} solutions",
            self.constraints.len(),
            stats.nodes,
            stats.solutions
        );
        Ok(stats)
    }

    /// Collect every satisfying assignment
    ///
    /// Without constraints this is all 26^5 strings, so prefer [`Self::solve`]
    /// with a visitor for early rounds.
    ///
    /// # Errors
    /// Returns `SolveError` if `limit` is hit before the enumeration finishes.
    pub fn solutions(&self, limit: SearchLimit) -> Result<Vec<Assignment>, SolveError> {
        let mut out = Vec::new();
        self.solve(limit, |a| out.push(a))?;
        Ok(out)
    }

    /// Check a complete word against every logged constraint directly
    #[must_use]
    pub fn is_satisfied_by(&self, word: &[u8; WORD_LENGTH]) -> bool {
        self.domains
            .iter()
            .zip(word)
            .all(|(domain, &letter)| domain.contains(letter))
            && self.constraints.iter().all(|c| c.holds(word))
    }
}
