//! Terminal rendering for command reports

use crate::commands::{AnalysisReport, SolveReport};
use crate::core::{FeedbackSymbol, Pattern, Word};
use colored::Colorize;

/// Render a guess with per-letter feedback coloring
///
/// Correct letters are green, present letters yellow, absent letters dimmed.
#[must_use]
pub fn colorize_guess(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, symbol)| {
            let cell = letter.to_string();
            match symbol {
                FeedbackSymbol::Correct => cell.green().bold().to_string(),
                FeedbackSymbol::Present => cell.yellow().bold().to_string(),
                FeedbackSymbol::Absent => cell.dimmed().to_string(),
            }
        })
        .collect()
}

/// Print a per-turn breakdown of one solved game
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("Target: {}", report.target);

    for (i, step) in report.steps.iter().enumerate() {
        let row = colorize_guess(&step.word, step.pattern);
        print!("{:>2}. {row}  {}", i + 1, step.pattern);

        if verbose {
            if let Some(bits) = step.entropy_bits {
                print!("  {bits:.3} bits");
            }
            print!(
                "  candidates {} -> {}",
                step.candidates_before, step.candidates_after
            );
        }
        println!();
    }

    if report.solved {
        println!(
            "{} in {} {}",
            "Solved".green().bold(),
            report.steps.len(),
            if report.steps.len() == 1 {
                "guess"
            } else {
                "guesses"
            }
        );
    } else {
        println!("{}: out of guesses", "Failed".red().bold());
    }
}

/// Print an entropy analysis
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("Word:           {}", report.word);
    println!(
        "Entropy:        {:.4} bits (max {:.4})",
        report.bits, report.max_bits
    );
    println!("Patterns:       {}", report.pattern_count);
    println!("Evaluated in:   {:?}", report.elapsed);
}
