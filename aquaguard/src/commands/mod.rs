// aquaguard/src/commands/mod.rs

pub mod check;
pub mod ranges;
pub mod score;
