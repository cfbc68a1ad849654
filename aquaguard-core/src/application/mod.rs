// aquaguard-core/src/application/mod.rs

pub mod check;
pub mod score;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use aquaguard_core::application::{check_sample, score_batch};`
// without knowing the internal file structure.

pub use check::check_sample;
pub use score::{BatchReport, ScoredRow, score_batch};
