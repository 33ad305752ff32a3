//! Command implementations for the CLI binary

mod analyze;
mod solve;

pub use analyze::{AnalysisReport, analyze_word};
pub use solve::{SolveReport, TurnStep, solve_target};
