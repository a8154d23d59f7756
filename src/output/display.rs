//! Display functions for command results

use colored::Colorize;
use std::io::{self, Write};

use super::formatters::{create_progress_bar, feedback_tiles, percentage};
use crate::core::RoundFeedback;
use crate::simulator::{BatchResult, GameRecord, Histogram, Outcome};
use crate::solver::{Constraint, RankedCandidate};

const BAR_WIDTH: usize = 40;

/// Print up to `limit` ranked candidates, best first
///
/// # Errors
/// Returns the I/O error if stdout cannot be written, e.g. a closed pipe.
pub fn print_candidates(candidates: &[RankedCandidate], limit: usize) -> io::Result<()> {
    write_candidates(&mut io::stdout().lock(), candidates, limit)
}

/// Write up to `limit` ranked candidates, best first
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_candidates<W: Write>(
    out: &mut W,
    candidates: &[RankedCandidate],
    limit: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {} remaining",
        candidates.len().to_string().bright_yellow().bold(),
        if candidates.len() == 1 { "candidate" } else { "candidates" }
    )?;
    for (i, candidate) in candidates.iter().take(limit).enumerate() {
        writeln!(
            out,
            "  {:>3}. {}  {}",
            (i + 1).to_string().bright_black(),
            candidate.word().text().to_uppercase().bright_white().bold(),
            format!("{:.2}", candidate.score()).cyan()
        )?;
    }
    if candidates.len() > limit {
        writeln!(
            out,
            "  {}",
            format!("... and {} more", candidates.len() - limit).bright_black()
        )?;
    }
    Ok(())
}

/// Print one simulated game round by round
pub fn print_game_record(record: &GameRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        record.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in record.rounds.iter().enumerate() {
        println!("\nTurn {}: {}  {}", i + 1, feedback_tiles(round), round.to_emoji());
        if verbose {
            println!("  Feedback:   {round}");
        }
    }

    println!();
    match record.outcome {
        Outcome::Solved(n) => println!(
            "{}",
            format!("✅ Solved in {n} {}!", if n == 1 { "guess" } else { "guesses" })
                .green()
                .bold()
        ),
        Outcome::Failed => {
            println!(
                "{}",
                format!("❌ Failed. Answer was: {}", record.target).red().bold()
            );
            if verbose {
                println!("  {} candidates were still open", record.remaining);
            }
        }
    }
}

/// Print the constraints one round of feedback produces
pub fn print_constraints(feedback: &RoundFeedback, constraints: &[Constraint]) {
    println!("\n{}  {}", feedback_tiles(feedback), feedback.to_emoji());
    println!("\n{}", "Constraints:".bright_cyan().bold());
    for constraint in constraints {
        println!("  • {constraint}");
    }
}

/// Print the outcome distribution as horizontal bars
pub fn print_histogram(histogram: &Histogram) {
    let total = histogram.total();
    for (label, count) in histogram.entries() {
        let pct = percentage(count, total);
        let bar = create_progress_bar(pct, 100.0, BAR_WIDTH);
        let (filled, empty) = bar.split_at(bar.find('░').unwrap_or(bar.len()));
        let filled = if label == "failed" {
            filled.red()
        } else {
            filled.green()
        };
        println!(
            "   {label:>6}: {filled}{} {count:5} ({pct:5.1}%)",
            empty.bright_black()
        );
    }
}

/// Print the summary of a simulated batch
pub fn print_batch_result(result: &BatchResult) {
    let histogram = &result.histogram;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", histogram.total());
    println!(
        "   Solved:           {} ({:.1}%)",
        histogram.solved().to_string().green(),
        percentage(histogram.solved(), histogram.total())
    );
    println!("   Failed:           {}", histogram.failed().to_string().red());
    if let Some(avg) = histogram.average_attempts() {
        println!(
            "   Average guesses:  {}",
            format!("{avg:.2}").bright_yellow().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_histogram(histogram);

    let failures: Vec<String> = result
        .failures()
        .take(10)
        .map(|g| g.target.text().to_uppercase())
        .collect();
    if !failures.is_empty() {
        println!("\n❌ {} {}", "Failed words:".red().bold(), failures.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::lexicon::Lexicon;
    use crate::solver::{Assignment, rank};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn candidates() -> Vec<RankedCandidate> {
        let words = ["crane", "slate", "irate"].map(|w| Word::new(w).unwrap());
        let lexicon = Lexicon::new(words.clone(), words.iter().cloned().zip([3.0, 2.0, 1.0]));
        rank([*b"irate", *b"crane", *b"slate"].map(Assignment::from), &lexicon)
    }

    #[test]
    fn write_failure_is_reported() {
        let err = write_candidates(&mut ClosedPipe, &candidates(), 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn lists_candidates_up_to_limit() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_candidates(&mut out, &candidates(), 2).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("3 candidates remaining"));
        let crane = text.find("CRANE").unwrap();
        let slate = text.find("SLATE").unwrap();
        assert!(crane < slate);
        assert!(!text.contains("IRATE"));
        assert!(text.contains("... and 1 more"));
    }
}
