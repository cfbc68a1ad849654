// aquaguard-core/src/domain/potability/mod.rs

pub mod decision;
pub mod range_rule;

pub use decision::{Assessment, decide, decide_batch};
pub use range_rule::{IDEAL_RANGES, IdealRange, RangeViolation, is_in_safe_range, violations};
