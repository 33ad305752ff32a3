//! Core domain types: validated words and feedback patterns

mod pattern;
mod word;

pub use pattern::{FeedbackSymbol, Pattern};
pub use word::{Word, WordError};
