//! Entropy-maximizing Wordle guess engine
//!
//! Selects guesses by maximizing expected information gain (Shannon entropy)
//! over feedback outcomes, under a soft per-turn time budget, and narrows
//! the candidate set as feedback arrives.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Pattern, Word};
//!
//! let guess = Word::new("SPEED").unwrap();
//! let answer = Word::new("CRANE").unwrap();
//!
//! let pattern = Pattern::simulate(&guess, &answer);
//! assert_eq!(pattern.to_string(), "--o--");
//! ```

// Core domain types
pub mod core;

// Solver configuration
pub mod config;

// Guess selection and candidate filtering
pub mod solver;

// Per-game turn state machine
pub mod game;

// Static word corpora
pub mod lexicon;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
