//! Core domain types for Wordle feedback
//!
//! Words, single-letter observations and whole-round feedback. Everything
//! here is validated on construction, so the constraint engine never sees a
//! malformed observation.

mod feedback;
mod observation;
mod word;

pub use feedback::{FormatError, RoundFeedback};
pub use observation::{Color, LetterObservation, ValidationError};
pub use word::{WORD_LENGTH, Word, WordError};
