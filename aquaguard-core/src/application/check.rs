// aquaguard-core/src/application/check.rs

use tracing::instrument;

use crate::domain::potability::{Assessment, decide};
use crate::domain::sample::WaterSample;
use crate::error::AquaGuardError;
use crate::ports::classifier::Classifier;

/// Single-record surface: bounds check, then the combined decision.
///
/// A reading outside its instrument input domain (e.g. ph = 20) is a
/// recoverable input error; a reading outside its ideal range is a normal
/// `Not Safe` outcome and never an error.
#[instrument(skip(classifier))]
pub fn check_sample(
    sample: &WaterSample,
    classifier: &dyn Classifier,
) -> Result<Assessment, AquaGuardError> {
    sample.check_domain()?;
    decide(sample, classifier)
}
