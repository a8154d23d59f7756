//! Automated play against known answers

use indicatif::ProgressBar;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

use super::histogram::{Histogram, Outcome};
use super::scoring::score_guess;
use crate::core::{RoundFeedback, Word};
use crate::game::{AUTOMATED_MAX_ATTEMPTS, GameError, GameSession, GameState, SessionConfig};
use crate::lexicon::Lexicon;
use crate::solver::SearchLimit;

/// Word guessed before any feedback exists
pub const DEFAULT_OPENING: [u8; 5] = *b"adieu";

/// Settings for simulated games
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// First guess of every game
    pub opening: Word,
    /// Attempts before a game counts as failed
    pub max_attempts: usize,
    /// Play the batch on the rayon thread pool
    pub parallel: bool,
    pub search_limit: SearchLimit,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            opening: Word::from_letters(DEFAULT_OPENING),
            max_attempts: AUTOMATED_MAX_ATTEMPTS,
            parallel: true,
            search_limit: SearchLimit::UNBOUNDED,
        }
    }
}

impl SimulationConfig {
    const fn session(&self) -> SessionConfig {
        SessionConfig {
            max_attempts: Some(self.max_attempts),
            search_limit: self.search_limit,
        }
    }
}

/// Everything that happened in one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: Word,
    pub rounds: Vec<RoundFeedback>,
    pub outcome: Outcome,
    /// Candidates left when the game ended
    pub remaining: usize,
}

impl GameRecord {
    /// Guessed words in order
    pub fn guesses(&self) -> impl Iterator<Item = String> + '_ {
        self.rounds.iter().map(RoundFeedback::word)
    }
}

/// Play one game: open with the configured word, then always guess the
/// top-ranked candidate
///
/// # Errors
/// Returns `GameError::Solve` if a round exceeds the search limit.
pub fn play_game(
    lexicon: &Lexicon,
    target: &Word,
    config: &SimulationConfig,
) -> Result<GameRecord, GameError> {
    let mut session = GameSession::new(lexicon, config.session());
    let mut guess = config.opening.clone();

    let outcome = loop {
        let feedback = score_guess(&guess, target);
        match session.submit(feedback)? {
            GameState::Solved { attempts } => break Outcome::Solved(attempts),
            GameState::Exhausted { reason, .. } => {
                debug!("{target}: {reason}");
                break Outcome::Failed;
            }
            GameState::AwaitingFeedback => match session.suggestion() {
                Some(next) => guess = next.word().clone(),
                None => break Outcome::Failed,
            },
        }
    };

    debug!("{target}: {outcome} after {} rounds", session.attempts());
    Ok(GameRecord {
        target: target.clone(),
        rounds: session.history().to_vec(),
        outcome,
        remaining: session.candidates().len(),
    })
}

/// Pick `count` distinct targets from the corpus
///
/// The same seed always yields the same targets; `None` draws from the OS.
#[must_use]
pub fn sample_targets(lexicon: &Lexicon, count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    lexicon
        .words()
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Aggregated result of a batch
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub histogram: Histogram,
    /// One record per target, in target order
    pub games: Vec<GameRecord>,
    pub duration: Duration,
}

impl BatchResult {
    /// Games that ran out of attempts or candidates
    pub fn failures(&self) -> impl Iterator<Item = &GameRecord> {
        self.games.iter().filter(|g| !g.outcome.is_solved())
    }
}

/// Play one game per target and merge the outcomes
///
/// Each game has its own session; only the lexicon is shared. `progress` is
/// advanced once per finished game.
///
/// # Errors
/// Returns the first `GameError` raised by any game.
pub fn run_batch(
    lexicon: &Lexicon,
    targets: &[Word],
    config: &SimulationConfig,
    progress: Option<&ProgressBar>,
) -> Result<BatchResult, GameError> {
    let start = Instant::now();
    let play = |target: &Word| {
        let record = play_game(lexicon, target, config);
        if let Some(pb) = progress {
            pb.inc(1);
        }
        record
    };

    let games: Vec<GameRecord> = if config.parallel {
        targets.par_iter().map(play).collect::<Result<_, _>>()?
    } else {
        targets.iter().map(play).collect::<Result<_, _>>()?
    };

    let empty = || Histogram::new(config.max_attempts);
    let histogram = if config.parallel {
        games
            .par_iter()
            .fold(empty, |mut h, g| {
                h.record(g.outcome);
                h
            })
            .reduce(empty, Histogram::merge)
    } else {
        let mut h = empty();
        h.extend(games.iter().map(|g| g.outcome));
        h
    };

    let duration = start.elapsed();
    info!(
        "batch of {} games: {} solved, {} failed in {:.2}s",
        games.len(),
        histogram.solved(),
        histogram.failed(),
        duration.as_secs_f64()
    );

    Ok(BatchResult {
        histogram,
        games,
        duration,
    })
}
