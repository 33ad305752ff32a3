//! Entropy analysis command
//!
//! Evaluates one word against the full answer set and reports how much
//! information it is expected to gain.

use crate::core::Word;
use crate::lexicon::Lexicon;
use crate::solver::evaluate_entropy;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Entropy analysis of a single word
pub struct AnalysisReport {
    pub word: Word,
    pub bits: f64,
    pub pattern_count: usize,
    /// Upper bound for this candidate set, log2(|answers|)
    pub max_bits: f64,
    pub elapsed: Duration,
}

/// Analyze the entropy of one word against the answer lexicon
///
/// # Errors
/// Fails if the word is not a valid 5-letter word.
pub fn analyze_word(word: &str, lexicon: &Lexicon) -> Result<AnalysisReport> {
    let word = Word::new(word).context("invalid word")?;

    let start = Instant::now();
    let breakdown = evaluate_entropy(&word, lexicon.answers());
    let elapsed = start.elapsed();

    Ok(AnalysisReport {
        word,
        bits: breakdown.bits,
        pattern_count: breakdown.pattern_count(),
        max_bits: (lexicon.answers().len() as f64).log2(),
        elapsed,
    })
}
