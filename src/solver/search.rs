//! Backtracking enumeration of satisfying assignments
//!
//! Variables are assigned left to right, letters in alphabetical order, so
//! solutions come out in lexicographic order. Two checks prune the tree:
//! each position only tries letters from its node-consistent domain, and a
//! branch is dropped as soon as the required letters still missing can no
//! longer fit into the remaining positions.

use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

use super::domain::LetterSet;
use crate::core::{WORD_LENGTH, Word};

/// How often (in visited nodes) the wall clock is consulted
const DEADLINE_CHECK_INTERVAL: u64 = 4096;

/// A complete assignment of letters to the five positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment([u8; WORD_LENGTH]);

impl Assignment {
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn to_word(self) -> Word {
        Word::from_letters(self.0)
    }
}

impl From<[u8; WORD_LENGTH]> for Assignment {
    fn from(letters: [u8; WORD_LENGTH]) -> Self {
        Self(letters)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Bound on how much work a single solve may do
///
/// The default is unbounded; feedback-derived constraint sets collapse the
/// search quickly, so limits only matter for hand-built constraint sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimit {
    max_nodes: Option<u64>,
    deadline: Option<Instant>,
}

impl SearchLimit {
    /// No limit at all
    pub const UNBOUNDED: Self = Self {
        max_nodes: None,
        deadline: None,
    };

    /// Stop after visiting `max_nodes` search nodes
    #[must_use]
    pub const fn nodes(max_nodes: u64) -> Self {
        Self {
            max_nodes: Some(max_nodes),
            deadline: None,
        }
    }

    /// Stop once `budget` of wall-clock time has elapsed from now
    #[must_use]
    pub fn within(budget: Duration) -> Self {
        Self {
            max_nodes: None,
            deadline: Instant::now().checked_add(budget),
        }
    }

    #[must_use]
    pub const fn max_nodes(&self) -> Option<u64> {
        self.max_nodes
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max_nodes.is_none() && self.deadline.is_none()
    }
}

/// Counters from one completed search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Partial assignments tried
    pub nodes: u64,
    /// Complete assignments reported
    pub solutions: u64,
}

/// Search aborted before it could enumerate every solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("search abandoned after visiting {nodes} nodes (node limit reached)")]
    NodeLimit { nodes: u64 },
    #[error("search abandoned after visiting {nodes} nodes (deadline passed)")]
    Deadline { nodes: u64 },
}

/// Enumerate every assignment drawn from `domains` that places all `required` letters
pub(crate) fn enumerate<F>(
    domains: &[LetterSet; WORD_LENGTH],
    required: LetterSet,
    limit: SearchLimit,
    visit: F,
) -> Result<SearchStats, SolveError>
where
    F: FnMut(Assignment),
{
    // reachable[i]: letters that can still appear at positions i..
    let mut reachable = [LetterSet::EMPTY; WORD_LENGTH + 1];
    for i in (0..WORD_LENGTH).rev() {
        reachable[i] = reachable[i + 1].union(domains[i]);
    }

    let mut search = Search {
        domains,
        reachable,
        required,
        limit,
        visit,
        stats: SearchStats::default(),
        word: [0; WORD_LENGTH],
    };
    search.descend(0, LetterSet::EMPTY)?;
    Ok(search.stats)
}

struct Search<'a, F> {
    domains: &'a [LetterSet; WORD_LENGTH],
    reachable: [LetterSet; WORD_LENGTH + 1],
    required: LetterSet,
    limit: SearchLimit,
    visit: F,
    stats: SearchStats,
    word: [u8; WORD_LENGTH],
}

impl<F: FnMut(Assignment)> Search<'_, F> {
    fn descend(&mut self, index: usize, placed: LetterSet) -> Result<(), SolveError> {
        if index == WORD_LENGTH {
            if self.required.is_subset(placed) {
                self.stats.solutions += 1;
                (self.visit)(Assignment(self.word));
            }
            return Ok(());
        }

        let remaining = WORD_LENGTH - index - 1;
        for letter in self.domains[index].iter() {
            self.tick()?;

            let placed = placed.with(letter);
            let missing = self.required.difference(placed);
            if missing.len() > remaining || !missing.is_subset(self.reachable[index + 1]) {
                continue;
            }

            self.word[index] = letter;
            self.descend(index + 1, placed)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Result<(), SolveError> {
        self.stats.nodes += 1;
        let nodes = self.stats.nodes;

        if self.limit.max_nodes.is_some_and(|max| nodes > max) {
            return Err(SolveError::NodeLimit { nodes: nodes - 1 });
        }
        if nodes % DEADLINE_CHECK_INTERVAL == 0
            && self.limit.deadline.is_some_and(|d| Instant::now() >= d)
        {
            return Err(SolveError::Deadline { nodes });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(domains: &[LetterSet; 5], required: LetterSet) -> Vec<String> {
        let mut out = Vec::new();
        enumerate(domains, required, SearchLimit::UNBOUNDED, |a| {
            out.push(a.to_string());
        })
        .unwrap();
        out
    }

    fn set(letters: &str) -> LetterSet {
        letters.bytes().collect()
    }

    #[test]
    fn enumerates_cartesian_product_in_order() {
        let domains = [set("ab"), set("c"), set("de"), set("f"), set("g")];
        assert_eq!(
            collect(&domains, LetterSet::EMPTY),
            vec!["acdfg", "acefg", "bcdfg", "bcefg"]
        );
    }

    #[test]
    fn required_letters_filter_leaves() {
        let domains = [set("ab"), set("ab"), set("x"), set("x"), set("x")];
        assert_eq!(
            collect(&domains, set("b")),
            vec!["abxxx", "baxxx", "bbxxx"]
        );
        assert_eq!(collect(&domains, set("ab")), vec!["abxxx", "baxxx"]);
    }

    #[test]
    fn too_many_required_letters_yields_nothing() {
        let domains = [LetterSet::ALPHABET; 5];
        let stats = enumerate(&domains, set("abcdef"), SearchLimit::UNBOUNDED, |_| {
            panic!("six required letters cannot fit five positions")
        })
        .unwrap();
        assert_eq!(stats.solutions, 0);
        // pruned at the first level
        assert_eq!(stats.nodes, 26);
    }

    #[test]
    fn empty_domain_yields_nothing() {
        let domains = [set("a"), LetterSet::EMPTY, set("a"), set("a"), set("a")];
        assert!(collect(&domains, LetterSet::EMPTY).is_empty());
    }

    #[test]
    fn forward_check_prunes_unreachable_required_letters() {
        // 'z' only fits position 0; every other first letter is abandoned immediately
        let domains = [
            LetterSet::ALPHABET,
            set("ab"),
            set("ab"),
            set("ab"),
            set("ab"),
        ];
        let mut count = 0;
        let stats = enumerate(&domains, set("z"), SearchLimit::UNBOUNDED, |a| {
            assert_eq!(a.letters()[0], b'z');
            count += 1;
        })
        .unwrap();
        assert_eq!(count, 16);
        assert_eq!(stats.nodes, 26 + 2 + 4 + 8 + 16);
    }

    #[test]
    fn node_limit_aborts_search() {
        let domains = [LetterSet::ALPHABET; 5];
        let result = enumerate(&domains, LetterSet::EMPTY, SearchLimit::nodes(1000), |_| {});
        assert_eq!(result, Err(SolveError::NodeLimit { nodes: 1000 }));
    }

    #[test]
    fn expired_deadline_aborts_search() {
        let domains = [LetterSet::ALPHABET; 5];
        let result = enumerate(&domains, LetterSet::EMPTY, SearchLimit::within(Duration::ZERO), |_| {});
        assert!(matches!(result, Err(SolveError::Deadline { .. })));
    }

    #[test]
    fn limit_constructors() {
        assert!(SearchLimit::UNBOUNDED.is_unbounded());
        assert!(SearchLimit::default().is_unbounded());
        assert_eq!(SearchLimit::nodes(7).max_nodes(), Some(7));
        assert!(!SearchLimit::within(Duration::from_secs(1)).is_unbounded());
    }
}
