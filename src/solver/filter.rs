//! Candidate narrowing policies
//!
//! Given one observed feedback, a filter returns the subset of candidates
//! still consistent with it. Two policies exist because not every feedback
//! source follows exact two-pass semantics; the caller picks the policy
//! based on how much it trusts the source. Neither policy is inferred.

use crate::core::{FeedbackSymbol, Pattern, Word};
use std::fmt;

/// How to interpret observed feedback when narrowing candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Exact match against locally simulated feedback.
    ///
    /// Correct for sources that follow the two-pass rules: local simulation
    /// and exact-target checks.
    Strict,
    /// Tolerant of sources that mark duplicate-letter occurrences
    /// inconsistently (one occurrence `Absent` while another occurrence of
    /// the same letter is `Correct`/`Present` in the same response).
    Permissive,
}

/// Feedback ruled out every remaining candidate
///
/// Distinguishable from normal narrowing so the caller can apply its own
/// recovery (fallback guess, abort, report).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContradiction {
    pub guess: Word,
    pub pattern: Pattern,
}

impl fmt::Display for FilterContradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no candidate is consistent with {} -> {}",
            self.guess, self.pattern
        )
    }
}

impl std::error::Error for FilterContradiction {}

impl FilterPolicy {
    /// Narrow `candidates` to those consistent with one observed feedback
    ///
    /// Always returns a subset of the input. O(|candidates| · 5).
    ///
    /// # Errors
    /// Returns `FilterContradiction` when nothing survives: the observed
    /// feedback is inconsistent with every known candidate.
    pub fn filter(
        self,
        candidates: &[Word],
        guess: &Word,
        observed: Pattern,
    ) -> Result<Vec<Word>, FilterContradiction> {
        let retained: Vec<Word> = match self {
            Self::Strict => candidates
                .iter()
                .filter(|candidate| Pattern::simulate(guess, candidate) == observed)
                .cloned()
                .collect(),
            Self::Permissive => candidates
                .iter()
                .filter(|candidate| permissive_match(guess, observed, candidate))
                .cloned()
                .collect(),
        };

        if retained.is_empty() {
            return Err(FilterContradiction {
                guess: guess.clone(),
                pattern: observed,
            });
        }

        Ok(retained)
    }
}

/// Permissive consistency check for one candidate
///
/// Per position i with guess letter L:
/// - `Correct`: candidate[i] must equal L.
/// - `Present`: candidate must contain L somewhere, and candidate[i] != L.
/// - `Absent`: if L is non-Absent at any other position of this feedback,
///   only this position is banned; otherwise L is banned everywhere.
fn permissive_match(guess: &Word, observed: Pattern, candidate: &Word) -> bool {
    // Which guess letters received a non-Absent mark anywhere in this feedback
    let mut non_absent = [false; 26];
    for i in 0..5 {
        if observed.symbol_at(i) != FeedbackSymbol::Absent {
            non_absent[usize::from(guess.letter_at(i) - b'A')] = true;
        }
    }

    for i in 0..5 {
        let letter = guess.letter_at(i);
        match observed.symbol_at(i) {
            FeedbackSymbol::Correct => {
                if candidate.letter_at(i) != letter {
                    return false;
                }
            }
            FeedbackSymbol::Present => {
                if candidate.letter_at(i) == letter || !candidate.has_letter(letter) {
                    return false;
                }
            }
            FeedbackSymbol::Absent => {
                if non_absent[usize::from(letter - b'A')] {
                    // Another occurrence of this letter was marked; the
                    // source only ruled out this position.
                    if candidate.letter_at(i) == letter {
                        return false;
                    }
                } else if candidate.has_letter(letter) {
                    return false;
                }
            }
        }
    }

    true
}
