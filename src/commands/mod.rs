//! Command implementations

pub mod check;
pub mod play;
pub mod simulate;
pub mod solve;

pub use check::{CheckResult, check_feedback};
pub use play::run_play;
pub use simulate::{SimulateOptions, run_simulation};
pub use solve::solve_word;
