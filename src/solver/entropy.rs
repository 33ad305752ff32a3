//! Shannon entropy evaluation for candidate guesses
//!
//! Given a guess and the remaining candidate set, computes the expected
//! information gain (in bits) of the feedback distribution the guess induces.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Entropy of a guess together with its feedback histogram
#[derive(Debug, Clone)]
pub struct EntropyBreakdown {
    /// Shannon entropy in bits
    pub bits: f64,
    /// How many candidates fall into each feedback pattern
    pub histogram: FxHashMap<Pattern, usize>,
}

impl EntropyBreakdown {
    /// Number of distinct feedback patterns the guess can induce
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.histogram.len()
    }
}

/// Evaluate a guess against the candidate set
///
/// Simulates feedback for every candidate, accumulates the pattern
/// histogram, and computes `H = -Σ p·log₂(p)` over non-empty buckets.
///
/// Fast path: with one candidate or fewer the guess has no discriminating
/// power, so 0 bits is returned without any simulation.
///
/// Guarantee: `0 <= bits <= log2(|candidates|)`; exactly 0 iff every
/// candidate induces the same pattern.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::entropy::evaluate_entropy;
///
/// let guess = Word::new("CRANE").unwrap();
/// let candidates = vec![
///     Word::new("SLATE").unwrap(),
///     Word::new("IRATE").unwrap(),
/// ];
///
/// let breakdown = evaluate_entropy(&guess, &candidates);
/// assert!(breakdown.bits > 0.0 && breakdown.bits <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn evaluate_entropy(guess: &Word, candidates: &[Word]) -> EntropyBreakdown {
    if candidates.len() <= 1 {
        return EntropyBreakdown {
            bits: 0.0,
            histogram: FxHashMap::default(),
        };
    }

    let histogram = pattern_histogram(guess, candidates);
    let bits = shannon_entropy(&histogram);

    EntropyBreakdown { bits, histogram }
}

/// Group candidates by the feedback pattern they would produce for `guess`
#[must_use]
pub fn pattern_histogram(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::simulate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a pattern distribution
///
/// `H = -Σ p·log₂(p)` with `p = count / total`, skipping empty buckets.
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(counts: &HashMap<Pattern, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
