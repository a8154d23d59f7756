//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Color, RoundFeedback};

/// Render a round as letter tiles on colored backgrounds
#[must_use]
pub fn feedback_tiles(feedback: &RoundFeedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|obs| tile(char::from(obs.letter()), obs.color()).to_string())
        .collect()
}

fn tile(letter: char, color: Color) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match color {
        Color::Green => text.black().on_green().bold(),
        Color::Yellow => text.black().on_yellow().bold(),
        Color::Gray => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `count` in `total` as a percentage
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
