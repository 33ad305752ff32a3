//! Local solve command
//!
//! Drives a full game against a known target word, using the local
//! simulator as the feedback source.

use crate::core::{Pattern, Word};
use crate::game::GameState;
use crate::lexicon::Lexicon;
use crate::solver::{FilterPolicy, GuessSelector, evaluate_entropy};
use anyhow::{Context, Result};

/// One turn of a solved game
pub struct TurnStep {
    pub word: Word,
    pub pattern: Pattern,
    pub entropy_bits: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Outcome of solving one target word
pub struct SolveReport {
    pub target: Word,
    pub steps: Vec<TurnStep>,
    pub solved: bool,
}

/// Solve a specific target word end to end
///
/// # Errors
/// Fails for an invalid target word, or if recorded feedback contradicts
/// every remaining candidate (possible when the target is outside the
/// answer lexicon).
pub fn solve_target(
    target: &str,
    lexicon: &Lexicon,
    selector: &GuessSelector,
    policy: FilterPolicy,
) -> Result<SolveReport> {
    let target = Word::new(target).context("invalid target word")?;

    let mut state = GameState::new(lexicon.answers().to_vec())?;
    let mut steps = Vec::new();

    while !state.is_over() {
        let candidates_before = state.candidates().len();

        let guess = selector.select_guess(state.candidates(), state.turn(), lexicon.allowed())?;

        let entropy_bits = if candidates_before > 1 {
            Some(evaluate_entropy(&guess, state.candidates()).bits)
        } else {
            None
        };

        let pattern = Pattern::simulate(&guess, &target);

        state
            .record_guess(guess.clone(), pattern, policy)
            .with_context(|| format!("feedback for {guess} ruled out every candidate"))?;

        steps.push(TurnStep {
            word: guess,
            pattern,
            entropy_bits,
            candidates_before,
            candidates_after: state.candidates().len(),
        });
    }

    Ok(SolveReport {
        target,
        solved: state.is_solved(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use std::time::Duration;

    fn test_selector() -> GuessSelector {
        GuessSelector::new(&SolverConfig::with_time_budget(Duration::from_secs(2))).unwrap()
    }

    #[test]
    fn solves_a_word_from_the_answer_list() {
        let lexicon = Lexicon::embedded();
        let selector = test_selector();

        let report = solve_target("CRANE", &lexicon, &selector, FilterPolicy::Strict).unwrap();

        assert!(report.solved);
        assert!(!report.steps.is_empty());
        assert!(report.steps.len() <= 6);
        assert_eq!(report.steps.last().unwrap().word, report.target);
        assert!(report.steps.last().unwrap().pattern.is_all_correct());
    }

    #[test]
    fn candidate_counts_never_grow() {
        let lexicon = Lexicon::embedded();
        let selector = test_selector();

        let report = solve_target("GRATE", &lexicon, &selector, FilterPolicy::Strict).unwrap();

        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn rejects_invalid_target() {
        let lexicon = Lexicon::embedded();
        let selector = test_selector();

        assert!(solve_target("TOOLONG", &lexicon, &selector, FilterPolicy::Strict).is_err());
    }
}
