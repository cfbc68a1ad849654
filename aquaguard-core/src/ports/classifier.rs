// aquaguard-core/src/ports/classifier.rs

// This file defines what the decision core needs from the trained model,
// without knowing how inference is done. The model artifact, its format and
// its training are entirely behind this trait.

use crate::domain::sample::WaterSample;
use crate::error::AquaGuardError;

/// Binary label emitted by the trained classifier.
/// `1 = potable, 0 = not potable` — the wire convention of the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NotPotable = 0,
    Potable = 1,
}

impl Label {
    pub fn from_i64(raw: i64) -> Self {
        if raw == 1 { Label::Potable } else { Label::NotPotable }
    }
}

pub trait Classifier: Send + Sync {
    /// One label per record. Feature order is fixed by
    /// [`crate::domain::FEATURE_COLUMNS`].
    fn predict(&self, sample: &WaterSample) -> Result<Label, AquaGuardError>;

    /// Same length and order as the input. Adapters with a real batch API
    /// should override this; the default just maps `predict`.
    fn predict_batch(&self, samples: &[WaterSample]) -> Result<Vec<Label>, AquaGuardError> {
        samples.iter().map(|s| self.predict(s)).collect()
    }
}

/// Fixed-output stand-in used by tests to exercise the decision combinator
/// without the real artifact.
#[cfg(test)]
pub(crate) struct StubClassifier(pub Label);

#[cfg(test)]
impl Classifier for StubClassifier {
    fn predict(&self, _sample: &WaterSample) -> Result<Label, AquaGuardError> {
        Ok(self.0)
    }
}
