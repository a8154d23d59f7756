//! Batch simulation
//!
//! Plays complete games against known answers using synthetic feedback and
//! collects how many attempts each one took.

mod histogram;
mod runner;
mod scoring;

pub use histogram::{Histogram, Outcome};
pub use runner::{
    BatchResult, DEFAULT_OPENING, GameRecord, SimulationConfig, play_game, run_batch,
    sample_targets,
};
pub use scoring::score_guess;
