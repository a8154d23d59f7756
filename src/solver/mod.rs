//! Constraint-satisfaction solving
//!
//! Feedback becomes constraints, the engine enumerates every assignment of
//! letters to the five positions that satisfies them, and the ranker keeps
//! the real words in utility order.

mod constraint;
mod domain;
mod engine;
mod ranker;
mod search;

pub use constraint::{Constraint, constraints_for};
pub use domain::LetterSet;
pub use engine::{ConstraintEngine, Contradiction};
pub use ranker::{RankedCandidate, Ranker, rank};
pub use search::{Assignment, SearchLimit, SearchStats, SolveError};
