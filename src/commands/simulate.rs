//! Batch simulation command
//!
//! Samples targets from the corpus and plays an automated game against each.

use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};

use crate::lexicon::Lexicon;
use crate::simulator::{BatchResult, SimulationConfig, run_batch, sample_targets};

/// What to simulate
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    /// Number of games; capped at the corpus size
    pub count: usize,
    /// Seed for target sampling
    pub seed: Option<u64>,
    /// Draw a progress bar while playing
    pub progress: bool,
}

/// Play a batch of games against sampled targets
///
/// # Errors
/// Returns an error if the lexicon is empty or a game exceeds the search limit.
pub fn run_simulation(
    lexicon: &Lexicon,
    options: &SimulateOptions,
    config: &SimulationConfig,
) -> Result<BatchResult> {
    ensure!(!lexicon.is_empty(), "the corpus has no words to simulate against");
    let targets = sample_targets(lexicon, options.count, options.seed);

    if options.progress {
        println!("🎯 Simulating {} games...", targets.len());
    }

    let pb = if options.progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = run_batch(lexicon, &targets, config, Some(&pb))?;
    pb.finish_with_message("Complete!");
    Ok(result)
}
