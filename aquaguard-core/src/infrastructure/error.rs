// aquaguard-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ModelError {
    #[error("Model artifact not found at '{0}'")]
    #[diagnostic(
        code(aquaguard::infra::model_missing),
        help("No verdict can be produced without the trained classifier. Point --model (or AQUAGUARD_MODEL_PATH) at the ONNX artifact.")
    )]
    ArtifactMissing(String),

    #[error("Model Runtime Error: {0}")]
    #[diagnostic(
        code(aquaguard::infra::model_runtime),
        help("The ONNX session failed to load or run the artifact.")
    )]
    Runtime(#[from] ort::Error),

    #[error("Model output '{0}' has an unsupported tensor type")]
    #[diagnostic(code(aquaguard::infra::model_output))]
    UnsupportedOutput(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- MODEL (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),

    // --- CSV ENGINE ---
    #[error("CSV Engine Error: {0}")]
    #[diagnostic(
        code(aquaguard::infra::engine),
        help("The batch file could not be read or planned. Check that it is a well-formed CSV.")
    )]
    Engine(#[from] datafusion::error::DataFusionError),

    #[error("Arrow Error: {0}")]
    #[diagnostic(code(aquaguard::infra::arrow))]
    Arrow(#[from] datafusion::arrow::error::ArrowError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(aquaguard::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(aquaguard::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

// Manual implementation for shortcuts (e.g. `?` operator on ort calls)
impl From<ort::Error> for InfrastructureError {
    fn from(err: ort::Error) -> Self {
        InfrastructureError::Model(ModelError::Runtime(err))
    }
}
