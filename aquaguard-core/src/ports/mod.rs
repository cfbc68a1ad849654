// aquaguard-core/src/ports/mod.rs

pub mod classifier;
pub mod table;

pub use classifier::{Classifier, Label};
pub use table::TableStore;
