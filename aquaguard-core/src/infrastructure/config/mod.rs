// aquaguard-core/src/infrastructure/config/mod.rs

pub mod settings;

pub use settings::{AppConfig, load_config};
