//! Synthetic feedback for a guess against a known answer

use crate::core::{Color, RoundFeedback, WORD_LENGTH, Word};

/// Color each letter of `guess` the way the puzzle would for `target`
///
/// Algorithm:
/// 1. First pass: exact matches are GREEN and use up one copy of their letter
/// 2. Second pass, left to right: a letter with copies left is YELLOW and uses one up
/// 3. Everything else is GRAY
///
/// # Examples
/// ```
/// use wordle_csp::core::{Color, Word};
/// use wordle_csp::simulator::score_guess;
///
/// let guess = Word::new("speed").unwrap();
/// let target = Word::new("abide").unwrap();
/// let feedback = score_guess(&guess, &target);
///
/// // S(gray) P(gray) E(yellow) E(gray, no copies left) D(yellow)
/// assert_eq!(
///     feedback.colors(),
///     [Color::Gray, Color::Gray, Color::Yellow, Color::Gray, Color::Yellow]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &Word, target: &Word) -> RoundFeedback {
    let mut colors = [Color::Gray; WORD_LENGTH];
    let mut available = target.letter_counts();

    for (i, color) in colors.iter_mut().enumerate() {
        if guess.char_at(i) == target.char_at(i) {
            *color = Color::Green;
            available[usize::from(guess.char_at(i) - b'a')] -= 1;
        }
    }

    for (i, color) in colors.iter_mut().enumerate() {
        if *color == Color::Green {
            continue;
        }
        let count = &mut available[usize::from(guess.char_at(i) - b'a')];
        if *count > 0 {
            *color = Color::Yellow;
            *count -= 1;
        }
    }

    RoundFeedback::from_colors(guess, colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Gray, Green, Yellow};

    fn colors(guess: &str, target: &str) -> [Color; WORD_LENGTH] {
        score_guess(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).colors()
    }

    #[test]
    fn exact_match_is_all_green() {
        let feedback = score_guess(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        assert!(feedback.is_solved());
        assert_eq!(feedback.word(), "crane");
    }

    #[test]
    fn no_shared_letters_is_all_gray() {
        assert_eq!(colors("crane", "pious"), [Gray; 5]);
    }

    #[test]
    fn misplaced_letters_are_yellow() {
        // crane vs slate: c gray, r gray, a green, n gray, e green
        assert_eq!(colors("crane", "slate"), [Gray, Gray, Green, Gray, Green]);
        assert_eq!(colors("adieu", "crane"), [Yellow, Gray, Gray, Yellow, Gray]);
    }

    #[test]
    fn duplicate_guess_letters_are_not_both_gray_or_yellow() {
        // both words carry their e's at positions 3 and 4
        assert_eq!(colors("sheep", "speed"), [Green, Gray, Green, Green, Yellow]);
        assert_eq!(colors("speed", "sheep"), [Green, Yellow, Green, Green, Gray]);

        // one 'e' in the target: only the first guess copy is yellow
        assert_eq!(colors("speed", "abide"), [Gray, Gray, Yellow, Gray, Yellow]);
    }

    #[test]
    fn surplus_copies_are_gray() {
        // one 'e' in the target: green takes it before the earlier guess copy
        assert_eq!(colors("geese", "those"), [Gray, Gray, Gray, Green, Green]);
        // the green copy leaves nothing for the earlier e's
        assert_eq!(colors("eerie", "crane"), [Gray, Gray, Yellow, Gray, Green]);
    }

    #[test]
    fn positions_match_guess() {
        let feedback = score_guess(&Word::new("stare").unwrap(), &Word::new("sauce").unwrap());
        for (i, obs) in feedback.letters().iter().enumerate() {
            assert_eq!(obs.position(), i + 1);
        }
        assert_eq!(feedback.word(), "stare");
    }
}
