//! Per-game turn state machine
//!
//! A `GameState` tracks one game: turn counter, guess history, the shrinking
//! candidate set, and the terminal flags. It is advanced only through
//! `record_guess`, which narrows candidates through the caller-chosen
//! `FilterPolicy`. One state is single-threaded by design; independent games
//! may run in parallel since they share only the read-only lexicon.

use crate::core::{Pattern, Word};
use crate::solver::{FilterContradiction, FilterPolicy};
use std::fmt;

/// Maximum number of guesses per game
pub const MAX_TURNS: u8 = 6;

/// One recorded guess and the feedback it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub pattern: Pattern,
}

/// Error type for game state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A game cannot start from an empty candidate set
    NoCandidates,
    /// Feedback ruled out every remaining candidate
    Contradiction(FilterContradiction),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "initial candidate set is empty"),
            Self::Contradiction(c) => write!(f, "{c}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoCandidates => None,
            Self::Contradiction(c) => Some(c),
        }
    }
}

impl From<FilterContradiction> for GameError {
    fn from(c: FilterContradiction) -> Self {
        Self::Contradiction(c)
    }
}

/// State of one game in progress
#[derive(Debug, Clone)]
pub struct GameState {
    turn: u8,
    history: Vec<Guess>,
    candidates: Vec<Word>,
    solved: bool,
    failed: bool,
}

impl GameState {
    /// Start a new game over the given candidates
    ///
    /// Normally the full answer lexicon; callers may pass any subset.
    ///
    /// # Errors
    /// Returns `GameError::NoCandidates` for an empty candidate set.
    pub fn new(candidates: Vec<Word>) -> Result<Self, GameError> {
        if candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }

        Ok(Self {
            turn: 1,
            history: Vec::new(),
            candidates,
            solved: false,
            failed: false,
        })
    }

    /// Current turn number (1-based; 7 once all six guesses are spent)
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> u8 {
        self.turn
    }

    /// Guesses recorded so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Words still consistent with every recorded feedback
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[inline]
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.failed
    }

    /// Whether the game reached a terminal state (solved or failed)
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.solved || self.failed
    }

    /// Guesses left before the game fails
    #[must_use]
    pub fn remaining_turns(&self) -> u8 {
        MAX_TURNS.saturating_sub(self.history.len() as u8)
    }

    /// Record one guess result and narrow the candidates
    ///
    /// Appends to history, advances the turn, then sets `solved` if the
    /// pattern is all-Correct or `failed` once the turn counter passes
    /// `MAX_TURNS`. If the game continues, candidates are narrowed through
    /// `policy`; on contradiction the candidate set is left untouched and
    /// the error propagates so the caller can choose a recovery.
    ///
    /// Must not be called once the game is over; that is a usage contract,
    /// checked only in debug builds.
    ///
    /// # Errors
    /// Returns `GameError::Contradiction` when the feedback is inconsistent
    /// with every remaining candidate.
    pub fn record_guess(
        &mut self,
        word: Word,
        pattern: Pattern,
        policy: FilterPolicy,
    ) -> Result<(), GameError> {
        debug_assert!(!self.is_over(), "record_guess called on a finished game");

        self.history.push(Guess {
            word: word.clone(),
            pattern,
        });
        self.turn += 1;

        if pattern.is_all_correct() {
            self.solved = true;
        } else if self.turn > MAX_TURNS {
            self.failed = true;
        }

        if !self.is_over() {
            self.candidates = policy.filter(&self.candidates, &word, pattern)?;
        }

        Ok(())
    }
}
