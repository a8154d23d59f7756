//! One puzzle attempt
//!
//! A `GameSession` owns its constraint engine and feedback history and moves
//! through `AwaitingFeedback → Solved | Exhausted`. Each submitted round is
//! applied to a copy of the engine; the copy replaces the live engine only
//! once solving succeeded, so a failed submission leaves the session as it was.

use log::{debug, info};
use std::fmt;
use thiserror::Error;

use crate::core::{FormatError, RoundFeedback};
use crate::lexicon::Lexicon;
use crate::solver::{ConstraintEngine, Contradiction, RankedCandidate, Ranker, SearchLimit, SolveError};

/// Attempt limit used when the computer plays against a known answer
pub const AUTOMATED_MAX_ATTEMPTS: usize = 6;

/// Why a session ended without a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustReason {
    /// The feedback log contradicts itself
    Contradiction(Contradiction),
    /// The constraints admit assignments, but none is a lexicon word
    NoCandidates,
    /// The configured number of attempts ran out
    AttemptLimit,
}

impl fmt::Display for ExhaustReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction(c) => write!(f, "contradictory feedback: {c}"),
            Self::NoCandidates => f.write_str("no valid words remain"),
            Self::AttemptLimit => f.write_str("out of attempts"),
        }
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingFeedback,
    Solved { attempts: usize },
    Exhausted { attempts: usize, reason: ExhaustReason },
}

impl GameState {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::AwaitingFeedback)
    }
}

/// Rejected submission; the session is unchanged
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid feedback: {0}")]
    Format(#[from] FormatError),
    #[error("the game is already over")]
    Finished,
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Per-session settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Give up after this many rounds (`None` for no limit)
    pub max_attempts: Option<usize>,
    /// Bound applied to every solve
    pub search_limit: SearchLimit,
}

impl SessionConfig {
    /// Interactive play: no attempt limit
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            max_attempts: None,
            search_limit: SearchLimit::UNBOUNDED,
        }
    }

    /// Simulated play: six attempts
    #[must_use]
    pub const fn automated() -> Self {
        Self {
            max_attempts: Some(AUTOMATED_MAX_ATTEMPTS),
            search_limit: SearchLimit::UNBOUNDED,
        }
    }
}

/// The state of one puzzle attempt
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    lexicon: &'a Lexicon,
    config: SessionConfig,
    engine: ConstraintEngine,
    history: Vec<RoundFeedback>,
    candidates: Vec<RankedCandidate>,
    state: GameState,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, config: SessionConfig) -> Self {
        Self {
            lexicon,
            config,
            engine: ConstraintEngine::new(),
            history: Vec::new(),
            candidates: Vec::new(),
            state: GameState::AwaitingFeedback,
        }
    }

    /// Apply one round of feedback and advance the state machine
    ///
    /// # Errors
    /// - `GameError::Finished` if the session already ended
    /// - `GameError::Solve` if the search limit was hit
    ///
    /// In both cases the session is left untouched.
    pub fn submit(&mut self, feedback: RoundFeedback) -> Result<GameState, GameError> {
        if self.state.is_finished() {
            return Err(GameError::Finished);
        }

        let mut engine = self.engine.clone();
        engine.apply(&feedback);
        let (candidates, contradiction) = self.solve(&engine)?;

        self.engine = engine;
        self.history.push(feedback);
        self.candidates = candidates;

        let attempts = self.history.len();
        let solved = self.history.last().is_some_and(RoundFeedback::is_solved);

        self.state = if solved {
            GameState::Solved { attempts }
        } else if self.candidates.is_empty() {
            GameState::Exhausted {
                attempts,
                reason: contradiction.map_or(ExhaustReason::NoCandidates, ExhaustReason::Contradiction),
            }
        } else if self.config.max_attempts.is_some_and(|max| attempts >= max) {
            GameState::Exhausted {
                attempts,
                reason: ExhaustReason::AttemptLimit,
            }
        } else {
            GameState::AwaitingFeedback
        };

        info!(
            "round {attempts}: {} -> {} candidates, {:?}",
            self.history[attempts - 1].to_emoji(),
            self.candidates.len(),
            self.state
        );
        Ok(self.state)
    }

    /// Parse a feedback line and submit it
    ///
    /// # Errors
    /// `GameError::Format` for malformed notation, otherwise as [`Self::submit`].
    pub fn submit_line(&mut self, line: &str) -> Result<GameState, GameError> {
        let feedback = RoundFeedback::parse(line)?;
        self.submit(feedback)
    }

    /// Drop the last round, rebuilding the engine from the remaining history
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    ///
    /// # Errors
    /// `GameError::Solve` if re-solving hits the search limit; the session is
    /// then unchanged.
    pub fn undo(&mut self) -> Result<bool, GameError> {
        let Some((_, kept)) = self.history.split_last() else {
            return Ok(false);
        };

        let mut engine = ConstraintEngine::new();
        for round in kept {
            engine.apply(round);
        }
        let candidates = if kept.is_empty() {
            Vec::new()
        } else {
            self.solve(&engine)?.0
        };

        self.history.pop();
        self.engine = engine;
        self.candidates = candidates;
        self.state = GameState::AwaitingFeedback;
        debug!("undo: back to round {}", self.history.len());
        Ok(true)
    }

    /// Start over with the same lexicon and settings
    pub fn reset(&mut self) {
        *self = Self::new(self.lexicon, self.config);
    }

    fn solve(
        &self,
        engine: &ConstraintEngine,
    ) -> Result<(Vec<RankedCandidate>, Option<Contradiction>), SolveError> {
        if let Some(contradiction) = engine.contradiction() {
            debug!("contradiction detected: {contradiction}");
            return Ok((Vec::new(), Some(contradiction)));
        }

        let mut ranker = Ranker::new(self.lexicon);
        engine.solve(self.config.search_limit, |a| {
            ranker.offer(a);
        })?;
        Ok((ranker.finish(), None))
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Ranked candidates after the latest round (empty before the first)
    #[must_use]
    pub fn candidates(&self) -> &[RankedCandidate] {
        &self.candidates
    }

    /// The best-ranked candidate, if any
    #[must_use]
    pub fn suggestion(&self) -> Option<&RankedCandidate> {
        self.candidates.first()
    }

    #[must_use]
    pub fn history(&self) -> &[RoundFeedback] {
        &self.history
    }

    /// Rounds submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn engine(&self) -> &ConstraintEngine {
        &self.engine
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn lexicon(words: &[(&str, f64)]) -> Lexicon {
        Lexicon::new(
            words.iter().map(|(w, _)| Word::new(*w).unwrap()),
            words.iter().map(|&(w, s)| (Word::new(w).unwrap(), s)),
        )
    }

    fn small_lexicon() -> Lexicon {
        lexicon(&[
            ("sauce", 3.0),
            ("salve", 5.0),
            ("shade", 9.0),
            ("stale", 8.0),
            ("crane", 7.0),
        ])
    }

    const STARE: &str = "(s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GRAY), (e, 5, GREEN)";

    #[test]
    fn starts_awaiting_with_no_candidates() {
        let lex = small_lexicon();
        let session = GameSession::new(&lex, SessionConfig::interactive());
        assert_eq!(session.state(), GameState::AwaitingFeedback);
        assert!(session.candidates().is_empty());
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn round_narrows_and_ranks_candidates() {
        let lex = small_lexicon();
        let mut session = GameSession::new(&lex, SessionConfig::interactive());

        let state = session.submit_line(STARE).unwrap();
        assert_eq!(state, GameState::AwaitingFeedback);

        // shade has 'a' at position 3, stale has 't', crane does not start with s
        let words: Vec<&str> = session.candidates().iter().map(|c| c.word().text()).collect();
        assert_eq!(words, ["salve", "sauce"]);
        assert_eq!(session.suggestion().map(|c| c.word().text()), Some("salve"));
    }

    #[test]
    fn all_green_round_solves() {
        let lex = small_lexicon();
        let mut session = GameSession::new(&lex, SessionConfig::interactive());
        session.submit_line(STARE).unwrap();

        let state = session
            .submit_line("(s, 1, GREEN), (a, 2, GREEN), (l, 3, GREEN), (v, 4, GREEN), (e, 5, GREEN)")
            .unwrap();
        assert_eq!(state, GameState::Solved { attempts: 2 });
        assert_eq!(session.candidates().len(), 1);
    }

    #[test]
    fn no_lexicon_match_exhausts() {
        let lex = lexicon(&[("crane", 1.0)]);
        let mut session = GameSession::new(&lex, SessionConfig::interactive());

        let state = session.submit_line(STARE).unwrap();
        assert_eq!(
            state,
            GameState::Exhausted {
                attempts: 1,
                reason: ExhaustReason::NoCandidates
            }
        );
        assert!(session.candidates().is_empty());
    }

    #[test]
    fn contradiction_across_rounds_exhausts() {
        let lex = small_lexicon();
        let mut session = GameSession::new(&lex, SessionConfig::interactive());
        session.submit_line(STARE).unwrap();

        // 's' was green at position 1, now reported absent everywhere
        let state = session
            .submit_line("(s, 1, GRAY), (h, 2, GRAY), (o, 3, GRAY), (u, 4, GRAY), (t, 5, GRAY)")
            .unwrap();
        assert_eq!(
            state,
            GameState::Exhausted {
                attempts: 2,
                reason: ExhaustReason::Contradiction(Contradiction::EmptyDomain { position: 1 })
            }
        );
    }

    #[test]
    fn attempt_limit_exhausts_with_candidates_left() {
        let lex = small_lexicon();
        let config = SessionConfig {
            max_attempts: Some(1),
            ..SessionConfig::automated()
        };
        let mut session = GameSession::new(&lex, config);

        let state = session.submit_line(STARE).unwrap();
        assert_eq!(
            state,
            GameState::Exhausted {
                attempts: 1,
                reason: ExhaustReason::AttemptLimit
            }
        );
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn finished_session_rejects_feedback() {
        let lex = lexicon(&[("crane", 1.0)]);
        let mut session = GameSession::new(&lex, SessionConfig::interactive());
        session.submit_line(STARE).unwrap();

        assert!(matches!(session.submit_line(STARE), Err(GameError::Finished)));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn bad_feedback_leaves_state_untouched() {
        let lex = small_lexicon();
        let mut session = GameSession::new(&lex, SessionConfig::interactive());
        session.submit_line(STARE).unwrap();
        let log_len = session.engine().constraints().len();

        let err = session.submit_line("(s, 1, GREEN), (t, 9, GRAY)").unwrap_err();
        assert!(matches!(err, GameError::Format(_)));
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.engine().constraints().len(), log_len);
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn search_limit_failure_leaves_state_untouched() {
        let lex = small_lexicon();
        let config = SessionConfig {
            max_attempts: None,
            search_limit: SearchLimit::nodes(5),
        };
        let mut session = GameSession::new(&lex, config);

        let err = session.submit_line(STARE).unwrap_err();
        assert!(matches!(err, GameError::Solve(SolveError::NodeLimit { .. })));
        assert_eq!(session.attempts(), 0);
        assert!(session.engine().constraints().is_empty());
        assert_eq!(session.state(), GameState::AwaitingFeedback);
    }

    #[test]
    fn undo_restores_previous_round() {
        let lex = small_lexicon();
        let mut session = GameSession::new(&lex, SessionConfig::interactive());
        session.submit_line(STARE).unwrap();
        let after_first: Vec<RankedCandidate> = session.candidates().to_vec();
        let log_len = session.engine().constraints().len();

        session
            .submit_line("(s, 1, GREEN), (a, 2, GREEN), (u, 3, GRAY), (c, 4, GRAY), (e, 5, GREEN)")
            .unwrap();
        assert_eq!(session.candidates().len(), 1);

        assert!(session.undo().unwrap());
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.candidates(), after_first.as_slice());
        assert_eq!(session.engine().constraints().len(), log_len);

        assert!(session.undo().unwrap());
        assert!(session.candidates().is_empty());
        assert!(!session.undo().unwrap());
    }

    #[test]
    fn undo_reopens_solved_game() {
        let lex = small_lexicon();
        let mut session = GameSession::new(&lex, SessionConfig::interactive());
        session
            .submit_line("(c, 1, GREEN), (r, 2, GREEN), (a, 3, GREEN), (n, 4, GREEN), (e, 5, GREEN)")
            .unwrap();
        assert!(session.state().is_finished());

        session.undo().unwrap();
        assert_eq!(session.state(), GameState::AwaitingFeedback);
    }

    #[test]
    fn reset_clears_everything() {
        let lex = small_lexicon();
        let mut session = GameSession::new(&lex, SessionConfig::automated());
        session.submit_line(STARE).unwrap();

        session.reset();
        assert_eq!(session.attempts(), 0);
        assert!(session.engine().constraints().is_empty());
        assert_eq!(session.config().max_attempts, Some(AUTOMATED_MAX_ATTEMPTS));
    }
}
