//! Wordle CSP Solver
//!
//! Solves 5-letter Wordle puzzles by turning each round of feedback into
//! constraints over the five letter positions, enumerating every assignment
//! that satisfies them, and ranking the ones that are real words.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_csp::game::{GameSession, SessionConfig};
//! use wordle_csp::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::embedded();
//! let mut session = GameSession::new(&lexicon, SessionConfig::interactive());
//!
//! session
//!     .submit_line("(s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GRAY), (e, 5, GREEN)")
//!     .unwrap();
//! if let Some(best) = session.suggestion() {
//!     println!("Next guess: {best}");
//! }
//! ```

// Core domain types
pub mod core;

// Constraint solving and ranking
pub mod solver;

// Corpus and utility scores
pub mod lexicon;

// Game loop state machine
pub mod game;

// Automated play and statistics
pub mod simulator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
