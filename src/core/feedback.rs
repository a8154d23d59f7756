//! Feedback for one complete guess
//!
//! A `RoundFeedback` holds five observations in position order and knows how
//! to parse and print the parenthesized notation used on the console:
//!
//! ```text
//! (s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GRAY), (e, 5, GREEN)
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::observation::{Color, LetterObservation, ValidationError};
use super::word::{WORD_LENGTH, Word};

/// Malformed feedback notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unexpected '{ch}' at offset {offset}; expected '(' to open a triple")]
    UnexpectedText { ch: char, offset: usize },
    #[error("unbalanced parenthesis at offset {offset}")]
    Unbalanced { offset: usize },
    #[error("triple {triple} has {found} fields; expected letter, position, COLOR")]
    FieldCount { triple: usize, found: usize },
    #[error("triple {triple}: position {text:?} is not an integer")]
    NotAnInteger { triple: usize, text: String },
    #[error("triple {triple}: {source}")]
    Invalid {
        triple: usize,
        #[source]
        source: ValidationError,
    },
    #[error("expected 5 triples, found {0}")]
    TripleCount(usize),
    #[error("triple {triple} is for position {found}; expected position {expected}")]
    PositionOrder {
        triple: usize,
        expected: usize,
        found: usize,
    },
}

/// The colored result of a single guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundFeedback {
    letters: [LetterObservation; WORD_LENGTH],
}

impl RoundFeedback {
    /// Build feedback from observations already in position order
    ///
    /// # Errors
    /// Returns `FormatError::PositionOrder` if observation `i` is not for
    /// position `i + 1`.
    pub fn new(letters: [LetterObservation; WORD_LENGTH]) -> Result<Self, FormatError> {
        for (i, obs) in letters.iter().enumerate() {
            if obs.position() != i + 1 {
                return Err(FormatError::PositionOrder {
                    triple: i + 1,
                    expected: i + 1,
                    found: obs.position(),
                });
            }
        }
        Ok(Self { letters })
    }

    /// Pair a guessed word with one color per position
    #[must_use]
    pub fn from_colors(guess: &Word, colors: [Color; WORD_LENGTH]) -> Self {
        let letters = std::array::from_fn(|i| LetterObservation::at(guess.char_at(i), i, colors[i]));
        Self { letters }
    }

    /// Parse the parenthesized notation
    ///
    /// # Errors
    /// Returns `FormatError` on unbalanced parentheses, a wrong field count,
    /// a non-integer position, stray text, invalid fields, or anything other
    /// than exactly one triple per position in order.
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::RoundFeedback;
    ///
    /// let fb = RoundFeedback::parse(
    ///     "(s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GREY), (e, 5, GREEN)",
    /// ).unwrap();
    /// assert_eq!(fb.word(), "stare");
    /// assert!(!fb.is_solved());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let mut triples: Vec<LetterObservation> = Vec::with_capacity(WORD_LENGTH);
        let mut open: Option<usize> = None;

        for (offset, ch) in input.char_indices() {
            match (ch, open) {
                ('(', None) => open = Some(offset + 1),
                ('(', Some(_)) | (')', None) => return Err(FormatError::Unbalanced { offset }),
                (')', Some(start)) => {
                    triples.push(parse_triple(&input[start..offset], triples.len() + 1)?);
                    open = None;
                }
                (_, Some(_)) => {}
                (c, None) if c == ',' || c.is_whitespace() => {}
                (c, None) => return Err(FormatError::UnexpectedText { ch: c, offset }),
            }
        }

        if let Some(start) = open {
            return Err(FormatError::Unbalanced { offset: start - 1 });
        }

        let letters: [LetterObservation; WORD_LENGTH] = triples
            .try_into()
            .map_err(|v: Vec<_>| FormatError::TripleCount(v.len()))?;
        Self::new(letters)
    }

    /// All five observations, in position order
    #[must_use]
    pub const fn letters(&self) -> &[LetterObservation; WORD_LENGTH] {
        &self.letters
    }

    /// True when every tile is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(|l| l.color() == Color::Green)
    }

    /// The guessed word, letters in position order
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| char::from(l.letter())).collect()
    }

    /// True when `letter` is green or yellow somewhere in this round
    ///
    /// A gray tile for such a letter only means "no more copies", so it must
    /// not exclude the letter everywhere.
    #[must_use]
    pub fn is_repeated(&self, letter: u8) -> bool {
        self.letters
            .iter()
            .any(|l| l.letter() == letter && matches!(l.color(), Color::Green | Color::Yellow))
    }

    /// Colors only, in position order
    #[must_use]
    pub fn colors(&self) -> [Color; WORD_LENGTH] {
        self.letters.map(|l| l.color())
    }

    /// Emoji row such as `🟩⬜🟨⬜🟩`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.color().emoji()).collect()
    }
}

fn parse_triple(body: &str, triple: usize) -> Result<LetterObservation, FormatError> {
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let [letter, position, color] = fields[..] else {
        return Err(FormatError::FieldCount {
            triple,
            found: fields.len(),
        });
    };

    let position: i64 = position.parse().map_err(|_| FormatError::NotAnInteger {
        triple,
        text: position.to_string(),
    })?;

    LetterObservation::from_fields(letter, position, color)
        .map_err(|source| FormatError::Invalid { triple, source })
}

impl FromStr for RoundFeedback {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RoundFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, obs) in self.letters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{obs}")?;
        }
        Ok(())
    }
}
