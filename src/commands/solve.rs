//! Word solving command
//!
//! Plays one automated game against a chosen target and returns the record.

use anyhow::{Context, Result};
use log::warn;

use crate::core::Word;
use crate::lexicon::Lexicon;
use crate::simulator::{GameRecord, SimulationConfig, play_game};

/// Solve `target` starting from the configured opening
///
/// A target outside the corpus is still played, but it can never become a
/// candidate, so the game only succeeds if the opening guesses it.
///
/// # Errors
/// Returns an error if the target is not a 5-letter word or a solve exceeds
/// the search limit.
pub fn solve_word(lexicon: &Lexicon, target: &str, config: &SimulationConfig) -> Result<GameRecord> {
    let target = Word::new(target).with_context(|| format!("Invalid target word {target:?}"))?;
    if !lexicon.contains(target.chars()) {
        warn!("{target} is not in the corpus");
    }
    Ok(play_game(lexicon, &target, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::Outcome;

    #[test]
    fn solves_crane_from_adieu() {
        let lexicon = Lexicon::embedded();
        let record = solve_word(&lexicon, "crane", &SimulationConfig::default()).unwrap();
        assert_eq!(record.target.text(), "crane");
        assert_eq!(record.outcome, Outcome::Solved(3));
        let guesses: Vec<String> = record.guesses().collect();
        assert_eq!(guesses, ["adieu", "stare", "crane"]);
    }

    #[test]
    fn rejects_invalid_target() {
        let lexicon = Lexicon::embedded();
        let err = solve_word(&lexicon, "toolong", &SimulationConfig::default()).unwrap_err();
        assert!(err.to_string().contains("toolong"));
    }

    #[test]
    fn unknown_target_fails_unless_opened() {
        let lexicon = Lexicon::new([Word::new("crane").unwrap()], []);
        let config = SimulationConfig {
            opening: Word::new("zzzzz").unwrap(),
            ..SimulationConfig::default()
        };
        let record = solve_word(&lexicon, "qqqqq", &config).unwrap();
        assert_eq!(record.outcome, Outcome::Failed);
    }
}
