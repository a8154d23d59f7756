//! Constraint variants derived from colored feedback

use std::fmt;

use crate::core::{Color, RoundFeedback};

/// One constraint over the five position variables
///
/// Positions are 0-based indices into the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Variable `index` must hold `letter` (green)
    Fixed { index: usize, letter: u8 },
    /// No variable may hold `letter` (gray)
    Excluded { letter: u8 },
    /// Variable `index` must not hold `letter` (yellow, or gray for a repeated letter)
    NotAt { index: usize, letter: u8 },
    /// At least one variable must hold `letter` (yellow)
    Required { letter: u8 },
}

impl Constraint {
    /// True when a complete assignment satisfies this constraint
    #[must_use]
    pub(crate) fn holds(&self, word: &[u8; 5]) -> bool {
        match *self {
            Self::Fixed { index, letter } => word[index] == letter,
            Self::Excluded { letter } => !word.contains(&letter),
            Self::NotAt { index, letter } => word[index] != letter,
            Self::Required { letter } => word.contains(&letter),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fixed { index, letter } => write!(f, "x{} = {}", index + 1, char::from(letter)),
            Self::Excluded { letter } => write!(f, "{} nowhere", char::from(letter)),
            Self::NotAt { index, letter } => write!(f, "x{} ≠ {}", index + 1, char::from(letter)),
            Self::Required { letter } => write!(f, "{} somewhere", char::from(letter)),
        }
    }
}

/// Translate one round of feedback into constraints
///
/// Observations are visited in color passes: greens first, then grays, then
/// yellows. A gray letter that is green or yellow elsewhere in the same round
/// only rules out its own position instead of the whole word.
#[must_use]
pub fn constraints_for(feedback: &RoundFeedback) -> Vec<Constraint> {
    let letters = feedback.letters();
    let mut out = Vec::with_capacity(letters.len() * 2);

    for obs in letters.iter().filter(|o| o.color() == Color::Green) {
        out.push(Constraint::Fixed {
            index: obs.index(),
            letter: obs.letter(),
        });
    }

    for obs in letters.iter().filter(|o| o.color() == Color::Gray) {
        if feedback.is_repeated(obs.letter()) {
            out.push(Constraint::NotAt {
                index: obs.index(),
                letter: obs.letter(),
            });
        } else {
            out.push(Constraint::Excluded {
                letter: obs.letter(),
            });
        }
    }

    for obs in letters.iter().filter(|o| o.color() == Color::Yellow) {
        out.push(Constraint::Required {
            letter: obs.letter(),
        });
        out.push(Constraint::NotAt {
            index: obs.index(),
            letter: obs.letter(),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ConstraintEngine;

    #[test]
    fn stare_feedback_translates_in_color_order() {
        let fb = RoundFeedback::parse(
            "(s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GRAY), (e, 5, GREEN)",
        )
        .unwrap();

        assert_eq!(
            constraints_for(&fb),
            vec![
                Constraint::Fixed { index: 0, letter: b's' },
                Constraint::Fixed { index: 4, letter: b'e' },
                Constraint::Excluded { letter: b't' },
                Constraint::Excluded { letter: b'r' },
                Constraint::Required { letter: b'a' },
                Constraint::NotAt { index: 2, letter: b'a' },
            ]
        );
    }

    #[test]
    fn repeated_gray_letter_is_not_excluded_globally() {
        // SPEED guessed against ABIDE: first E yellow, second E gray
        let fb = RoundFeedback::parse(
            "(s, 1, GRAY), (p, 2, GRAY), (e, 3, YELLOW), (e, 4, GRAY), (d, 5, YELLOW)",
        )
        .unwrap();
        let constraints = constraints_for(&fb);

        assert!(!constraints.contains(&Constraint::Excluded { letter: b'e' }));
        assert!(constraints.contains(&Constraint::NotAt { index: 3, letter: b'e' }));
        assert!(constraints.contains(&Constraint::Required { letter: b'e' }));
        assert!(constraints.contains(&Constraint::Excluded { letter: b's' }));
    }

    #[test]
    fn gray_copies_rule_out_a_repeated_guess() {
        // ADDED against ARMED: the d at 5 is green, the d's at 2 and 3 are surplus
        let fb = RoundFeedback::parse(
            "(a, 1, GREEN), (d, 2, GRAY), (d, 3, GRAY), (e, 4, GREEN), (d, 5, GREEN)",
        )
        .unwrap();

        assert_eq!(
            constraints_for(&fb),
            vec![
                Constraint::Fixed { index: 0, letter: b'a' },
                Constraint::Fixed { index: 3, letter: b'e' },
                Constraint::Fixed { index: 4, letter: b'd' },
                Constraint::NotAt { index: 1, letter: b'd' },
                Constraint::NotAt { index: 2, letter: b'd' },
            ]
        );

        let mut engine = ConstraintEngine::new();
        engine.apply(&fb);
        assert!(!engine.is_satisfied_by(b"added"));
        assert!(engine.is_satisfied_by(b"armed"));
    }

    #[test]
    fn holds_checks_each_variant() {
        let word = *b"crane";
        assert!(Constraint::Fixed { index: 0, letter: b'c' }.holds(&word));
        assert!(!Constraint::Fixed { index: 1, letter: b'c' }.holds(&word));
        assert!(Constraint::Excluded { letter: b'z' }.holds(&word));
        assert!(!Constraint::Excluded { letter: b'a' }.holds(&word));
        assert!(Constraint::NotAt { index: 0, letter: b'a' }.holds(&word));
        assert!(!Constraint::NotAt { index: 2, letter: b'a' }.holds(&word));
        assert!(Constraint::Required { letter: b'n' }.holds(&word));
        assert!(!Constraint::Required { letter: b'q' }.holds(&word));
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(Constraint::Fixed { index: 0, letter: b's' }.to_string(), "x1 = s");
        assert_eq!(Constraint::NotAt { index: 2, letter: b'a' }.to_string(), "x3 ≠ a");
        assert_eq!(Constraint::Excluded { letter: b't' }.to_string(), "t nowhere");
        assert_eq!(Constraint::Required { letter: b'a' }.to_string(), "a somewhere");
    }
}
