// aquaguard-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::infrastructure::error::InfrastructureError;

/// Process-level settings. Everything here has a sane default so the tool
/// works without any file; a YAML config and env vars layer on top.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Path to the trained classifier artifact (ONNX export).
    #[serde(rename = "model-path", default = "default_model_path")]
    pub model_path: PathBuf,

    /// Default output path for scored batches.
    #[serde(rename = "output-path", default = "default_output_path")]
    #[validate(length(min = 1, message = "output-path cannot be empty"))]
    pub output_path: String,

    /// Rows shown in the post-scoring preview table.
    #[serde(rename = "preview-rows", default = "default_preview_rows")]
    #[validate(range(min = 1, max = 100))]
    pub preview_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            output_path: default_output_path(),
            preview_rows: default_preview_rows(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("aquaguard_model.onnx")
}
fn default_output_path() -> String {
    "aquaguard_predictions.csv".to_string()
}
fn default_preview_rows() -> usize {
    5
}

/// Loads the config by layering: defaults <- YAML file (if any) <- env vars.
///
/// Unlike a project manifest, a missing config file is not an error here —
/// the CLI flags can supply everything the engine needs.
#[instrument(skip(dir))]
pub fn load_config(dir: &Path) -> Result<AppConfig, InfrastructureError> {
    let mut config = match find_config_file(dir) {
        Some(path) => {
            info!(path = ?path, "Loading configuration file");
            let content = fs::read_to_string(&path)?;
            let parsed: AppConfig = serde_yaml::from_str(&content)?;
            parsed
        }
        None => {
            debug!("no configuration file found, using defaults");
            AppConfig::default()
        }
    };

    // Env layering: AQUAGUARD_MODEL_PATH=/models/v2.onnx aquaguard score ...
    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| InfrastructureError::Config(e.to_string()))?;

    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    let candidates = ["aquaguard.yaml", "aquaguard_conf.yaml"];
    candidates
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(model_path) = std::env::var("AQUAGUARD_MODEL_PATH")
        && !model_path.is_empty()
    {
        config.model_path = PathBuf::from(model_path);
    }
    if let Ok(output) = std::env::var("AQUAGUARD_OUTPUT")
        && !output.is_empty()
    {
        config.output_path = output;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.model_path, PathBuf::from("aquaguard_model.onnx"));
        assert_eq!(config.output_path, "aquaguard_predictions.csv");
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("aquaguard.yaml"),
            "model-path: models/water_v2.onnx\npreview-rows: 10\n",
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.model_path, PathBuf::from("models/water_v2.onnx"));
        assert_eq!(config.preview_rows, 10);
        // Untouched key keeps its default
        assert_eq!(config.output_path, "aquaguard_predictions.csv");
    }

    #[test]
    fn test_invalid_preview_rows_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("aquaguard.yaml"), "preview-rows: 0\n").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::Config(_)));
    }
}
