//! Time-budgeted parallel guess selection
//!
//! The dominant cost of a turn is scoring the whole guess pool (order 10^4
//! words, each costing one simulation per remaining candidate). Evaluations
//! are independent and read-only, so they fan out over a bounded worker
//! pool while the coordinator enforces a soft deadline: submission stops at
//! 0.9x the budget, collection stops at the full budget, and in-flight work
//! is never interrupted - late results are simply discarded.

use crate::config::SolverConfig;
use crate::core::{Word, WordError};
use crate::solver::entropy::evaluate_entropy;
use std::cmp::Ordering;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Error type for guess selection
#[derive(Debug)]
pub enum SelectError {
    /// An empty candidate set is a caller error, never recovered silently
    NoCandidates,
    /// The configured first guess is not a valid word
    InvalidFirstGuess(WordError),
    /// The worker pool could not be created
    PoolBuild(rayon::ThreadPoolBuildError),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "candidate set is empty"),
            Self::InvalidFirstGuess(e) => write!(f, "invalid first guess: {e}"),
            Self::PoolBuild(e) => write!(f, "failed to build worker pool: {e}"),
        }
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoCandidates => None,
            Self::InvalidFirstGuess(e) => Some(e),
            Self::PoolBuild(e) => Some(e),
        }
    }
}

/// Selects the best guess for the current candidates under a time budget
pub struct GuessSelector {
    time_budget: Duration,
    first_guess: Word,
    pool: rayon::ThreadPool,
}

impl GuessSelector {
    /// Build a selector with its own bounded worker pool
    ///
    /// Worker count comes from the config override, falling back to
    /// available hardware parallelism.
    ///
    /// # Errors
    /// Fails if the configured first guess is not a valid word or the
    /// worker pool cannot be created.
    pub fn new(config: &SolverConfig) -> Result<Self, SelectError> {
        let first_guess = Word::new(config.first_guess.as_str())
            .map_err(SelectError::InvalidFirstGuess)?;

        let workers = config.max_workers.unwrap_or_else(default_workers);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(SelectError::PoolBuild)?;

        Ok(Self {
            time_budget: config.time_budget,
            first_guess,
            pool,
        })
    }

    /// The configured per-turn budget
    #[must_use]
    pub const fn time_budget(&self) -> Duration {
        self.time_budget
    }

    /// Select the best guess for the given candidates and turn
    ///
    /// - Turn 1 returns the precomputed first guess without any search.
    /// - With two candidates or fewer the first candidate is returned; at
    ///   that size it is equivalent in expectation and far cheaper.
    /// - Otherwise every pool word is scored by entropy against the
    ///   candidates, in pool order, under the soft time budget. Ties break
    ///   toward the earlier pool position, so results are reproducible
    ///   regardless of completion order.
    ///
    /// On budget expiry the best completed evaluation wins; if nothing
    /// completed at all, the first candidate is returned. The caller always
    /// gets a guess.
    ///
    /// # Errors
    /// Returns `SelectError::NoCandidates` for an empty candidate set.
    pub fn select_guess(
        &self,
        candidates: &[Word],
        turn: u8,
        guess_pool: &[Word],
    ) -> Result<Word, SelectError> {
        if candidates.is_empty() {
            return Err(SelectError::NoCandidates);
        }

        if turn <= 1 {
            return Ok(self.first_guess.clone());
        }

        if candidates.len() <= 2 {
            return Ok(candidates[0].clone());
        }

        Ok(self.budgeted_search(candidates, guess_pool))
    }

    /// Parallel entropy argmax over the guess pool under the soft deadline
    fn budgeted_search(&self, candidates: &[Word], guess_pool: &[Word]) -> Word {
        let start = Instant::now();
        let deadline = start + self.time_budget;
        let submit_cutoff = self.time_budget.mul_f64(0.9);

        let shared: Arc<[Word]> = candidates.into();
        let (tx, rx) = mpsc::channel::<(usize, Word, f64)>();

        let mut submitted = 0usize;
        for (index, guess) in guess_pool.iter().enumerate() {
            if start.elapsed() >= submit_cutoff {
                break;
            }

            let guess = guess.clone();
            let candidates = Arc::clone(&shared);
            let tx = tx.clone();
            self.pool.spawn(move || {
                // Past the deadline the coordinator has stopped listening;
                // skip the work instead of computing a result nobody reads.
                if Instant::now() >= deadline {
                    return;
                }
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    evaluate_entropy(&guess, &candidates).bits
                }));
                match outcome {
                    Ok(bits) => {
                        let _ = tx.send((index, guess, bits));
                    }
                    Err(_) => {
                        log::warn!("entropy evaluation failed for {guess}, skipping");
                    }
                }
            });
            submitted += 1;
        }
        drop(tx);

        let mut best: Option<(usize, Word, f64)> = None;
        let mut completed = 0usize;
        while completed < submitted {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match rx.recv_timeout(deadline - now) {
                Ok((index, word, bits)) => {
                    completed += 1;
                    let improves = match &best {
                        None => true,
                        Some((best_index, _, best_bits)) => match bits.total_cmp(best_bits) {
                            Ordering::Greater => true,
                            Ordering::Equal => index < *best_index,
                            Ordering::Less => false,
                        },
                    };
                    if improves {
                        best = Some((index, word, bits));
                    }
                }
                // Timeout: budget spent. Disconnected: every worker is done.
                Err(mpsc::RecvTimeoutError::Timeout | mpsc::RecvTimeoutError::Disconnected) => {
                    break;
                }
            }
        }

        match best {
            Some((_, word, bits)) => {
                log::debug!(
                    "selected {word} ({bits:.3} bits) from {completed}/{submitted} evaluations in {:?}",
                    start.elapsed()
                );
                word
            }
            None => {
                log::warn!(
                    "no evaluation completed within {:?}, falling back to first candidate",
                    self.time_budget
                );
                candidates[0].clone()
            }
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    fn selector(budget: Duration) -> GuessSelector {
        GuessSelector::new(&SolverConfig {
            time_budget: budget,
            max_workers: Some(2),
            ..SolverConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let s = selector(Duration::from_secs(1));
        let pool = words(&["CRANE"]);
        assert!(matches!(
            s.select_guess(&[], 2, &pool),
            Err(SelectError::NoCandidates)
        ));
    }

    #[test]
    fn first_turn_returns_precomputed_constant() {
        let s = selector(Duration::from_secs(1));
        let pool = words(&["CRANE", "SLATE"]);

        // Regardless of the candidate set passed in
        for candidates in [words(&["CRANE"]), words(&["SLATE", "IRATE", "GRATE"])] {
            let guess = s.select_guess(&candidates, 1, &pool).unwrap();
            assert_eq!(guess.text(), "SALET");
        }
    }

    #[test]
    fn two_or_fewer_candidates_returns_first() {
        let s = selector(Duration::from_secs(1));
        let pool = words(&["CRANE", "SLATE", "IRATE"]);

        let one = words(&["IRATE"]);
        assert_eq!(s.select_guess(&one, 3, &pool).unwrap().text(), "IRATE");

        let two = words(&["SLATE", "IRATE"]);
        assert_eq!(s.select_guess(&two, 4, &pool).unwrap().text(), "SLATE");
    }

    #[test]
    fn picks_the_most_discriminating_pool_word() {
        let s = selector(Duration::from_secs(5));
        // AAAAA cannot split these candidates at all; CRANE splits them fully
        let pool = words(&["AAAAA", "CRANE"]);
        let candidates = words(&["SLATE", "IRATE", "CRATE", "GRATE"]);

        let guess = s.select_guess(&candidates, 2, &pool).unwrap();
        assert_eq!(guess.text(), "CRANE");
    }

    #[test]
    fn ties_break_toward_earlier_pool_position() {
        let s = selector(Duration::from_secs(5));
        // Both pool words induce the all-absent pattern for every candidate,
        // so both score zero bits; the earlier pool word must win.
        let pool = words(&["BBBBB", "AAAAA"]);
        let candidates = words(&["CCCCC", "DDDDD", "EEEEE"]);

        for _ in 0..5 {
            let guess = s.select_guess(&candidates, 2, &pool).unwrap();
            assert_eq!(guess.text(), "BBBBB");
        }
    }

    #[test]
    fn near_zero_budget_falls_back_to_first_candidate() {
        let s = selector(Duration::ZERO);
        let pool = words(&["CRANE", "SLATE", "IRATE", "GRATE", "TRACE"]);
        let candidates = words(&["SLATE", "IRATE", "CRATE"]);

        let guess = s.select_guess(&candidates, 3, &pool).unwrap();
        assert_eq!(guess.text(), "SLATE");
    }

    #[test]
    fn selection_is_deterministic_across_runs() {
        let s = selector(Duration::from_secs(5));
        let pool = words(&["CRANE", "SLATE", "IRATE", "TRACE", "AAAAA"]);
        let candidates = words(&["IRATE", "CRATE", "GRATE", "SLATE"]);

        let first = s.select_guess(&candidates, 2, &pool).unwrap();
        for _ in 0..3 {
            assert_eq!(s.select_guess(&candidates, 2, &pool).unwrap(), first);
        }
    }

    #[test]
    fn invalid_first_guess_is_rejected_at_construction() {
        let config = SolverConfig {
            first_guess: "TOOLONG".to_string(),
            ..SolverConfig::default()
        };
        assert!(matches!(
            GuessSelector::new(&config),
            Err(SelectError::InvalidFirstGuess(_))
        ));
    }
}
