//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod chart;
pub mod display;
pub mod formatters;

pub use chart::show_histogram;
pub use display::{
    print_batch_result, print_candidates, print_constraints, print_game_record, print_histogram,
    write_candidates,
};
