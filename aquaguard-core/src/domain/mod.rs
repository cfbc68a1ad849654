// aquaguard-core/src/domain/mod.rs

pub mod error;
pub mod imputation;
pub mod potability;
pub mod sample;
pub mod verdict;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use sample::{FEATURE_COLUMNS, INPUT_BOUNDS, WaterSample};
pub use verdict::Verdict;
