// aquaguard-core/src/infrastructure/adapters/onnx.rs
//
// Thin pass-through to the externally trained gradient-boosted model,
// exported as ONNX. The core never looks inside the artifact: it feeds the
// nine features in canonical order and reads one label per record.

use ort::session::{Session, builder::GraphOptimizationLevel};
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::sample::{FEATURE_COLUMNS, WaterSample};
use crate::error::AquaGuardError;
use crate::infrastructure::error::{InfrastructureError, ModelError};
use crate::ports::classifier::{Classifier, Label};

/// ONNX-backed [`Classifier`]. The session is loaded once and shared
/// read-only for the rest of the process lifetime; there is no reload.
pub struct OnnxClassifier {
    session: Session,
    input_name: String,
    output_name: String,
}

impl OnnxClassifier {
    /// Loads the model artifact. A missing or unreadable artifact is fatal
    /// for every caller: no verdict can be produced without the model, and
    /// there is deliberately no rule-only fallback.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, AquaGuardError> {
        if !path.exists() {
            return Err(InfrastructureError::Model(ModelError::ArtifactMissing(
                path.display().to_string(),
            ))
            .into());
        }

        let session = Session::builder()
            .map_err(InfrastructureError::from)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(InfrastructureError::from)?
            .commit_from_file(path)
            .map_err(InfrastructureError::from)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.to_string())
            .ok_or_else(|| {
                AquaGuardError::InternalError("model declares no input tensor".to_string())
            })?;
        // CatBoost exports name this "label"; whatever it is, the first
        // output carries the class.
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.to_string())
            .ok_or_else(|| {
                AquaGuardError::InternalError("model declares no output tensor".to_string())
            })?;

        info!(path = %path.display(), input = %input_name, output = %output_name, "model artifact loaded");
        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }

    fn run_batch(&self, samples: &[WaterSample]) -> Result<Vec<Label>, AquaGuardError> {
        let rows = samples.len();
        let mut features: Vec<f32> = Vec::with_capacity(rows * FEATURE_COLUMNS.len());
        for sample in samples {
            features.extend(sample.as_features().iter().map(|v| *v as f32));
        }

        let input =
            ort::value::Value::from_array((vec![rows, FEATURE_COLUMNS.len()], features))
                .map_err(InfrastructureError::from)?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input].map_err(InfrastructureError::from)?)
            .map_err(InfrastructureError::from)?;

        // CatBoost-style exports put the class label first as int64; some
        // converters emit a float probability tensor instead.
        let output = &outputs[self.output_name.as_str()];
        if let Ok((_, labels)) = output.try_extract_tensor::<i64>() {
            return Ok(labels.iter().map(|raw| Label::from_i64(*raw)).collect());
        }
        if let Ok((shape, probs)) = output.try_extract_tensor::<f32>() {
            let classes = if shape.len() == 2 { shape[1] as usize } else { 1 };
            return Ok(probs
                .chunks(classes.max(1))
                .map(|row| {
                    // [p0, p1] → argmax; single column → threshold at 0.5
                    let p_potable = if row.len() >= 2 { row[1] } else { row[0] };
                    Label::from_i64((p_potable > 0.5) as i64)
                })
                .collect());
        }

        Err(InfrastructureError::Model(ModelError::UnsupportedOutput(
            self.output_name.clone(),
        ))
        .into())
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, sample: &WaterSample) -> Result<Label, AquaGuardError> {
        let labels = self.predict_batch(std::slice::from_ref(sample))?;
        labels.into_iter().next().ok_or_else(|| {
            AquaGuardError::InternalError("model returned no label".to_string())
        })
    }

    fn predict_batch(&self, samples: &[WaterSample]) -> Result<Vec<Label>, AquaGuardError> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }
        let labels = self.run_batch(samples)?;
        if labels.len() != samples.len() {
            return Err(AquaGuardError::InternalError(format!(
                "model returned {} labels for {} records",
                labels.len(),
                samples.len()
            )));
        }
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_fatal() {
        let err = OnnxClassifier::load(Path::new("/nonexistent/model.onnx")).unwrap_err();
        assert!(matches!(
            err,
            AquaGuardError::Infrastructure(InfrastructureError::Model(
                ModelError::ArtifactMissing(_)
            ))
        ));
    }
}
