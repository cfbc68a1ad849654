// aquaguard-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts the core depends on (Classifier, TableStore).
pub mod ports;

// 2. Domain (business core)
// Measurement records, the range rule, the decision combinator, imputation.
// Depends only on the Ports (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementation (DataFusion CSV store, ONNX classifier, config).
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (single-record check, batch scoring).
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use aquaguard_core::AquaGuardError;
pub use error::AquaGuardError;
