// aquaguard-core/src/domain/potability/decision.rs

use tracing::debug;

use crate::domain::potability::range_rule::{RangeViolation, violations};
use crate::domain::sample::WaterSample;
use crate::domain::verdict::Verdict;
use crate::error::AquaGuardError;
use crate::ports::classifier::{Classifier, Label};

/// Everything the decision produced for one record: the verdict plus the two
/// signals it was combined from, for display and audit.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub verdict: Verdict,
    pub rule_passed: bool,
    pub model_label: Label,
    pub violations: Vec<RangeViolation>,
}

impl Assessment {
    fn combine(sample_violations: Vec<RangeViolation>, model_label: Label) -> Self {
        let rule_passed = sample_violations.is_empty();
        // OR-combination: the model can only promote a record to Safe, never
        // demote one the rule already accepted.
        let verdict = if rule_passed || model_label == Label::Potable {
            Verdict::Safe
        } else {
            Verdict::NotSafe
        };
        Assessment {
            verdict,
            rule_passed,
            model_label,
            violations: sample_violations,
        }
    }

    /// Human-readable advice attached to the verdict. Presentation content,
    /// not contract.
    pub fn suggestion(&self) -> &'static str {
        match self.verdict {
            Verdict::Safe => {
                "Continue regular monitoring. Consider filtration if taste or odor issues are observed."
            }
            Verdict::NotSafe => {
                "Use boiling, filtration or reverse osmosis, or contact local water treatment before consumption."
            }
        }
    }
}

/// Combines the range rule with the classifier for one record:
/// `Safe` iff the sample is fully in-range OR the model predicts potable.
pub fn decide(
    sample: &WaterSample,
    classifier: &dyn Classifier,
) -> Result<Assessment, AquaGuardError> {
    let sample_violations = violations(sample);
    let model_label = classifier.predict(sample)?;
    let assessment = Assessment::combine(sample_violations, model_label);
    debug!(
        verdict = %assessment.verdict,
        rule_passed = assessment.rule_passed,
        model_label = ?assessment.model_label,
        "decision"
    );
    Ok(assessment)
}

/// Batch variant: one `predict_batch` call, output order matches input order.
/// No cross-record logic — each row is decided on its own.
pub fn decide_batch(
    samples: &[WaterSample],
    classifier: &dyn Classifier,
) -> Result<Vec<Assessment>, AquaGuardError> {
    let labels = classifier.predict_batch(samples)?;
    if labels.len() != samples.len() {
        return Err(AquaGuardError::InternalError(format!(
            "classifier returned {} labels for {} samples",
            labels.len(),
            samples.len()
        )));
    }
    Ok(samples
        .iter()
        .zip(labels)
        .map(|(sample, label)| Assessment::combine(violations(sample), label))
        .collect())
}
