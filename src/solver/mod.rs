//! Guess selection: entropy evaluation, time-budgeted search, candidate filtering

pub mod entropy;
pub mod filter;
mod selector;

pub use entropy::{EntropyBreakdown, evaluate_entropy};
pub use filter::{FilterContradiction, FilterPolicy};
pub use selector::{GuessSelector, SelectError};
