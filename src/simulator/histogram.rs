//! Outcome distribution over a batch of games

use std::fmt;

use crate::game::AUTOMATED_MAX_ATTEMPTS;

/// How one simulated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Solved on this attempt (1-based)
    Solved(usize),
    Failed,
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(n) => write!(f, "solved in {n}"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// Counts per attempt number plus failures
///
/// Histograms from separate workers are combined with [`Histogram::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    solved: Vec<usize>,
    failed: usize,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new(AUTOMATED_MAX_ATTEMPTS)
    }
}

impl Histogram {
    /// An empty histogram with buckets for attempts `1..=attempts`
    #[must_use]
    pub fn new(attempts: usize) -> Self {
        Self {
            solved: vec![0; attempts],
            failed: 0,
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Solved(0) | Outcome::Failed => self.failed += 1,
            Outcome::Solved(n) => {
                if n > self.solved.len() {
                    self.solved.resize(n, 0);
                }
                self.solved[n - 1] += 1;
            }
        }
    }

    /// Sum of two histograms
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if other.solved.len() > self.solved.len() {
            self.solved.resize(other.solved.len(), 0);
        }
        for (mine, theirs) in self.solved.iter_mut().zip(other.solved) {
            *mine += theirs;
        }
        self.failed += other.failed;
        self
    }

    /// Games solved on attempt `n` (1-based)
    #[must_use]
    pub fn solved_in(&self, n: usize) -> usize {
        n.checked_sub(1)
            .and_then(|i| self.solved.get(i))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.solved.iter().sum()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.solved() + self.failed
    }

    /// Mean attempts over solved games
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        let solved = self.solved();
        if solved == 0 {
            return None;
        }
        let attempts: usize = self.solved.iter().enumerate().map(|(i, &c)| (i + 1) * c).sum();
        Some(attempts as f64 / solved as f64)
    }

    /// `("1", n1) .. ("6", n6), ("failed", f)` in display order
    #[must_use]
    pub fn entries(&self) -> Vec<(String, usize)> {
        self.solved
            .iter()
            .enumerate()
            .map(|(i, &count)| ((i + 1).to_string(), count))
            .chain(std::iter::once(("failed".to_string(), self.failed)))
            .collect()
    }
}

impl Extend<Outcome> for Histogram {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl FromIterator<Outcome> for Histogram {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut histogram = Self::default();
        histogram.extend(iter);
        histogram
    }
}
