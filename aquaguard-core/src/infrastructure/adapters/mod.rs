// aquaguard-core/src/infrastructure/adapters/mod.rs

pub mod datafusion;
pub mod onnx;
