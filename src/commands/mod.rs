//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use play::run_play;
pub use solve::{GuessStep, SolveResult, solve_word};
