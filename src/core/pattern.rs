//! Feedback pattern simulation and representation
//!
//! A pattern is the per-position feedback for one guess against one answer:
//! `Correct` (right letter, right spot), `Present` (right letter, wrong
//! spot), `Absent` (letter not available). The compact text form uses one
//! character per position: `+` correct, `o` present, `-` absent.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Correct,
    Present,
    Absent,
}

impl FeedbackSymbol {
    /// Compact single-character form (`+`, `o`, `-`)
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Correct => '+',
            Self::Present => 'o',
            Self::Absent => '-',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `+` for correct, `o`/`O` for present, and `-`/`_`/`x`/`X`
    /// for absent (upstream feedback sources use both `x` and `-`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Correct),
            'o' | 'O' => Some(Self::Present),
            '-' | '_' | 'x' | 'X' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Ordered feedback for all five positions of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([FeedbackSymbol; 5]);

impl Pattern {
    /// All positions correct (the winning pattern)
    pub const ALL_CORRECT: Self = Self([FeedbackSymbol::Correct; 5]);

    /// Create a pattern from explicit symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; 5]) -> Self {
        Self(symbols)
    }

    /// The per-position symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; 5] {
        &self.0
    }

    /// Symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol_at(self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    /// Check whether every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Simulate the feedback `answer` would produce for `guess`
    ///
    /// Two-pass algorithm, required for correct duplicate-letter handling:
    ///
    /// 1. Build the answer's per-letter remaining counts.
    /// 2. Mark exact matches `Correct`, decrementing the matched letter.
    /// 3. For each remaining position, mark `Present` only while the letter
    ///    still has remaining count, decrementing as it is consumed.
    ///
    /// The decrement order is load-bearing: a single pass over- or
    /// under-counts `Present` when a letter repeats asymmetrically between
    /// guess and answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Pattern, Word};
    ///
    /// let guess = Word::new("SPEED").unwrap();
    /// let answer = Word::new("CRANE").unwrap();
    ///
    /// // CRANE has one E: the first E is present, the second exhausted.
    /// let pattern = Pattern::simulate(&guess, &answer);
    /// assert_eq!(pattern.to_string(), "--o--");
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, answer: &Word) -> Self {
        let mut symbols = [FeedbackSymbol::Absent; 5];
        let mut remaining = answer.letter_counts();

        // Pass 1: exact matches consume their letter first
        for i in 0..5 {
            if guess.letter_at(i) == answer.letter_at(i) {
                symbols[i] = FeedbackSymbol::Correct;
                remaining[usize::from(guess.letter_at(i) - b'A')] -= 1;
            }
        }

        // Pass 2: position-independent matches from what is left
        for i in 0..5 {
            if symbols[i] == FeedbackSymbol::Correct {
                continue;
            }
            let slot = usize::from(guess.letter_at(i) - b'A');
            if remaining[slot] > 0 {
                symbols[i] = FeedbackSymbol::Present;
                remaining[slot] -= 1;
            }
        }

        Self(symbols)
    }

    /// Count the number of `Correct` positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == FeedbackSymbol::Correct)
            .count()
    }

    /// Count the number of `Present` positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == FeedbackSymbol::Present)
            .count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 {
            return Err(format!("pattern must be 5 characters, got {}", chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Absent; 5];
        for (i, &c) in chars.iter().enumerate() {
            symbols[i] = FeedbackSymbol::from_char(c)
                .ok_or_else(|| format!("invalid feedback character: {c}"))?;
        }

        Ok(Self(symbols))
    }
}
