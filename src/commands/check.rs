//! Feedback inspection command
//!
//! Parses one feedback line and shows what the solver makes of it.

use anyhow::{Context, Result};

use crate::core::RoundFeedback;
use crate::lexicon::Lexicon;
use crate::solver::{Constraint, ConstraintEngine, Contradiction, RankedCandidate, Ranker, SearchLimit};

/// One round of feedback applied to an empty engine
#[derive(Debug)]
pub struct CheckResult {
    pub feedback: RoundFeedback,
    pub constraints: Vec<Constraint>,
    pub contradiction: Option<Contradiction>,
    pub candidates: Vec<RankedCandidate>,
}

/// Parse `line` and rank the lexicon words it leaves open
///
/// # Errors
/// Returns an error for malformed feedback or when the search limit is hit.
pub fn check_feedback(lexicon: &Lexicon, line: &str, limit: SearchLimit) -> Result<CheckResult> {
    let feedback = RoundFeedback::parse(line).context("Invalid feedback")?;

    let mut engine = ConstraintEngine::new();
    engine.apply(&feedback);

    let contradiction = engine.contradiction();
    let candidates = if contradiction.is_some() {
        Vec::new()
    } else {
        let mut ranker = Ranker::new(lexicon);
        engine.solve(limit, |a| {
            ranker.offer(a);
        })?;
        ranker.finish()
    };

    Ok(CheckResult {
        feedback,
        constraints: engine.constraints().to_vec(),
        contradiction,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn lexicon() -> Lexicon {
        let words = ["sauce", "salve", "shade", "crane", "aback"];
        Lexicon::new(words.iter().map(|w| Word::new(*w).unwrap()), [])
    }

    #[test]
    fn shows_constraints_and_candidates() {
        let result = check_feedback(
            &lexicon(),
            "(s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GRAY), (e, 5, GREEN)",
            SearchLimit::UNBOUNDED,
        )
        .unwrap();

        let shown: Vec<String> = result.constraints.iter().map(ToString::to_string).collect();
        assert!(shown.contains(&"x1 = s".to_string()));
        assert!(shown.contains(&"t nowhere".to_string()));
        assert!(shown.contains(&"a somewhere".to_string()));
        assert!(result.contradiction.is_none());
        assert_eq!(result.candidates.len(), 2);
    }

    #[test]
    fn guarded_gray_only_excludes_locally() {
        let result = check_feedback(
            &lexicon(),
            "(a, 1, GREEN), (b, 2, GRAY), (a, 3, GRAY), (c, 4, GRAY), (k, 5, GRAY)",
            SearchLimit::UNBOUNDED,
        );
        // 'a' is green at 1, so the gray 'a' at 3 is guarded and only local
        let result = result.unwrap();
        assert!(result.contradiction.is_none());
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn malformed_feedback_is_an_error() {
        let err = check_feedback(&lexicon(), "(s, 1, GREEN)", SearchLimit::UNBOUNDED).unwrap_err();
        assert!(err.to_string().contains("Invalid feedback"));
    }
}
