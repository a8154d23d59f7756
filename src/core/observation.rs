//! Single-letter feedback observations
//!
//! A `LetterObservation` is one colored tile: the letter that was guessed,
//! the 1-based position it was guessed at, and the color the game reported.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::word::WORD_LENGTH;

/// Tile color reported for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Correct letter in the correct position
    Green,
    /// Letter is in the word, but elsewhere
    Yellow,
    /// Letter is not in the word (or every copy is already accounted for)
    Gray,
}

impl Color {
    /// Canonical upper-case spelling used by the feedback notation
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Gray => "GRAY",
        }
    }

    /// Emoji tile for console output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    /// Both `GRAY` and `GREY` are accepted and normalized to [`Color::Gray`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "GREEN" => Ok(Self::Green),
            "YELLOW" => Ok(Self::Yellow),
            "GRAY" | "GREY" => Ok(Self::Gray),
            other => Err(ValidationError::UnknownColor(other.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected letter, position, or color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("position must be an integer between 1 and 5, inclusive (got {0})")]
    PositionOutOfRange(i64),
    #[error("letter must be a single lowercase ASCII letter (got {0:?})")]
    InvalidLetter(String),
    #[error("color must be one of GREEN, YELLOW, GRAY or GREY (got {0:?})")]
    UnknownColor(String),
}

/// One colored letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterObservation {
    letter: u8,
    position: usize,
    color: Color,
}

impl LetterObservation {
    /// Create an observation with a 1-based `position`
    ///
    /// # Errors
    /// Returns `ValidationError` if the position is outside `1..=5` or the
    /// letter is not lowercase ASCII.
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::{Color, LetterObservation};
    ///
    /// let obs = LetterObservation::new('s', 1, Color::Green).unwrap();
    /// assert_eq!(obs.index(), 0);
    /// assert!(LetterObservation::new('s', 6, Color::Green).is_err());
    /// ```
    pub fn new(letter: char, position: i64, color: Color) -> Result<Self, ValidationError> {
        if !letter.is_ascii_lowercase() {
            return Err(ValidationError::InvalidLetter(letter.to_string()));
        }
        let position = usize::try_from(position)
            .ok()
            .filter(|p| (1..=WORD_LENGTH).contains(p))
            .ok_or(ValidationError::PositionOutOfRange(position))?;

        Ok(Self {
            letter: letter as u8,
            position,
            color,
        })
    }

    /// Observation for a 0-based `index`, from a letter of an already validated word
    pub(crate) const fn at(letter: u8, index: usize, color: Color) -> Self {
        debug_assert!(letter.is_ascii_lowercase() && index < WORD_LENGTH);
        Self {
            letter,
            position: index + 1,
            color,
        }
    }

    /// Parse one `letter, position, COLOR` triple (without parentheses)
    ///
    /// # Errors
    /// Returns `ValidationError` for a bad letter or color; the caller is
    /// responsible for the field count and integer parsing.
    pub(crate) fn from_fields(letter: &str, position: i64, color: &str) -> Result<Self, ValidationError> {
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch, position, color.parse()?),
            _ => Err(ValidationError::InvalidLetter(letter.to_string())),
        }
    }

    /// The guessed letter as a byte
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// 1-based position (1..=5)
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// 0-based position (0..=4), for indexing variables
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.position - 1
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for LetterObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            char::from(self.letter),
            self.position,
            self.color
        )
    }
}
