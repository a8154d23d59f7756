//! Interactive console mode
//!
//! The player guesses in the real puzzle, types back the feedback, and gets
//! the ranked candidates for the next guess.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::core::Word;
use crate::game::{GameError, GameSession, GameState, SessionConfig};
use crate::lexicon::Lexicon;
use crate::output::formatters::feedback_tiles;
use crate::output::write_candidates;

/// Candidates listed after each round
const SHOWN_CANDIDATES: usize = 10;

/// Run the console loop until `quit` or end of input
///
/// Each line is either feedback notation for the guess just played or one
/// of the commands `quit`, `new` and `undo`.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    config: SessionConfig,
    opening: &Word,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║             Wordle CSP Solver - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "After each guess, enter the feedback one letter per triple:\n")?;
    writeln!(out, "  (s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GRAY), (e, 5, GREEN)\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n")?;

    let mut session = GameSession::new(lexicon, config);
    suggest_opening(&mut out, opening)?;

    loop {
        let prompt = format!("Round {} feedback", session.attempts() + 1);
        let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.reset();
                writeln!(out, "\n🔄 New game started!")?;
                suggest_opening(&mut out, opening)?;
            }
            "undo" | "u" => {
                if session.undo()? {
                    writeln!(out, "✓ Undone! Back to round {}", session.attempts() + 1)?;
                    show_suggestions(&mut out, &session, opening)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            _ => match session.submit_line(&line) {
                Ok(state) => {
                    report_round(&mut out, &session, state, opening)?;
                    if state.is_finished() {
                        session.reset();
                        writeln!(out, "\n🔄 New game started!")?;
                        suggest_opening(&mut out, opening)?;
                    }
                }
                Err(GameError::Format(e)) => {
                    writeln!(out, "{} {e}\n", "❌ Invalid feedback:".red())?;
                }
                Err(e) => writeln!(out, "{} {e}\n", "❌".red())?,
            },
        }
    }
}

fn report_round<W: Write>(
    out: &mut W,
    session: &GameSession<'_>,
    state: GameState,
    opening: &Word,
) -> Result<()> {
    if let Some(round) = session.history().last() {
        writeln!(out, "\n{}  {}", feedback_tiles(round), round.to_emoji())?;
    }

    match state {
        GameState::Solved { attempts } => {
            writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "    🎉 W O R D L E   S O L V E D ! 🎉    ".bright_green().bold()
            )?;
            writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "\n  Solved in {attempts} {}",
                if attempts == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameState::Exhausted { reason, .. } => {
            writeln!(out, "\n{}", "No valid words found!".red().bold())?;
            writeln!(out, "  ({reason})")?;
        }
        GameState::AwaitingFeedback => show_suggestions(out, session, opening)?,
    }
    Ok(())
}

fn show_suggestions<W: Write>(out: &mut W, session: &GameSession<'_>, opening: &Word) -> Result<()> {
    match session.suggestion() {
        Some(best) => {
            write_candidates(out, session.candidates(), SHOWN_CANDIDATES)?;
            writeln!(
                out,
                "\n📊 Suggested guess: {}\n",
                best.word().text().to_uppercase().bright_yellow().bold()
            )?;
        }
        None => suggest_opening(out, opening)?,
    }
    Ok(())
}

fn suggest_opening<W: Write>(out: &mut W, opening: &Word) -> Result<()> {
    writeln!(
        out,
        "\n📊 Suggested first guess: {}\n",
        opening.text().to_uppercase().bright_yellow().bold()
    )?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lexicon() -> Lexicon {
        let words = ["sauce", "salve", "shade", "crane"];
        Lexicon::new(
            words.iter().map(|w| Word::new(*w).unwrap()),
            [(Word::new("salve").unwrap(), 5.0), (Word::new("sauce").unwrap(), 3.0)],
        )
    }

    fn run(script: &str) -> String {
        let lex = lexicon();
        let opening = Word::new("stare").unwrap();
        let mut out = Vec::new();
        run_play(
            &lex,
            SessionConfig::interactive(),
            &opening,
            Cursor::new(script.as_bytes()),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    const STARE: &str = "(s, 1, GREEN), (t, 2, GRAY), (a, 3, YELLOW), (r, 4, GRAY), (e, 5, GREEN)";

    #[test]
    fn suggests_opening_then_top_candidate() {
        let output = run(&format!("{STARE}\nquit\n"));
        assert!(output.contains("STARE"));
        assert!(output.contains("SALVE"));
        assert!(output.contains("SAUCE"));
        assert!(!output.contains("SHADE"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn bad_feedback_is_reported_and_loop_continues() {
        let output = run("(s, 1, PURPLE)\nquit\n");
        assert!(output.contains("Invalid feedback"));
        assert!(output.contains("Round 1 feedback"));
    }

    #[test]
    fn no_match_reports_and_starts_over() {
        let output = run(
            "(x, 1, GREEN), (y, 2, GREEN), (l, 3, GREEN), (o, 4, GREEN), (s, 5, GRAY)\nquit\n",
        );
        assert!(output.contains("No valid words found!"));
        assert!(output.contains("New game started"));
    }

    #[test]
    fn solved_round_celebrates() {
        let output = run("(c, 1, GREEN), (r, 2, GREEN), (a, 3, GREEN), (n, 4, GREEN), (e, 5, GREEN)\n");
        assert!(output.contains("Solved in 1 guess"));
    }

    #[test]
    fn undo_and_end_of_input() {
        let output = run(&format!("undo\n{STARE}\nundo\n"));
        assert!(output.contains("Nothing to undo!"));
        assert!(output.contains("Back to round 1"));
        assert!(output.contains("Thanks for playing"));
    }
}
