//! Static word corpora
//!
//! A `Lexicon` holds the two read-only word lists: the answer set and the
//! broader allowed-guess set (answers are always a subset). It is built once
//! at startup and passed by reference into whatever needs it; there is no
//! process-wide singleton.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Embedded answer corpus
const ANSWERS_RAW: &str = include_str!("../../data/answers.txt");
/// Embedded guess-only words (valid guesses that are never answers)
const EXTRA_GUESSES_RAW: &str = include_str!("../../data/guesses.txt");

/// Error type for lexicon construction
#[derive(Debug)]
pub enum LexiconError {
    EmptyAnswers,
    AnswerNotAllowed(Word),
    Io(io::Error),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnswers => write!(f, "answer list is empty"),
            Self::AnswerNotAllowed(w) => {
                write!(f, "answer {w} is missing from the allowed-guess list")
            }
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LexiconError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// The two static word lists: answers plus the wider allowed-guess pool
#[derive(Debug, Clone)]
pub struct Lexicon {
    allowed: Vec<Word>,
    answers: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from explicit word lists
    ///
    /// Both lists are deduplicated preserving first-seen order, so the
    /// guess-pool iteration order (which breaks selection ties) is stable.
    ///
    /// # Errors
    /// Fails if the answer list is empty or contains a word missing from
    /// the allowed list.
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, LexiconError> {
        let allowed = dedupe(allowed);
        let answers = dedupe(answers);

        if answers.is_empty() {
            return Err(LexiconError::EmptyAnswers);
        }

        let allowed_set: FxHashSet<&str> = allowed.iter().map(Word::text).collect();
        for answer in &answers {
            if !allowed_set.contains(answer.text()) {
                return Err(LexiconError::AnswerNotAllowed(answer.clone()));
            }
        }

        Ok(Self { allowed, answers })
    }

    /// The compiled-in word lists
    ///
    /// # Panics
    /// Will not panic - the embedded lists are valid by construction
    /// (allowed = answers + guess-only extras) and checked in tests.
    #[must_use]
    pub fn embedded() -> Self {
        let answers = words_from_lines(ANSWERS_RAW);
        let mut allowed = answers.clone();
        allowed.extend(words_from_lines(EXTRA_GUESSES_RAW));

        Self::new(allowed, answers).expect("embedded word lists are valid")
    }

    /// Load a lexicon from two word-list files (one word per line)
    ///
    /// Invalid lines are skipped, matching how the embedded lists load.
    ///
    /// # Errors
    /// Fails on I/O problems or if the loaded lists violate the
    /// answers-subset-of-allowed invariant.
    pub fn from_files(
        allowed: impl AsRef<Path>,
        answers: impl AsRef<Path>,
    ) -> Result<Self, LexiconError> {
        let allowed = words_from_lines(&fs::read_to_string(allowed)?);
        let answers = words_from_lines(&fs::read_to_string(answers)?);
        Self::new(allowed, answers)
    }

    /// Every word accepted as a guess; the selector's search pool
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Words that can actually be the answer; a game's initial candidates
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

/// Parse newline-separated words, skipping blank or invalid lines
fn words_from_lines(raw: &str) -> Vec<Word> {
    raw.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

fn dedupe(words: Vec<Word>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.text().to_string()))
        .collect()
}
