//! Game loop
//!
//! Ties feedback, the constraint engine and the ranker together for one
//! puzzle at a time.

mod session;

pub use session::{
    AUTOMATED_MAX_ATTEMPTS, ExhaustReason, GameError, GameSession, GameState, SessionConfig,
};
