// aquaguard-core/src/application/score.rs
//
// USE CASE: score one uploaded batch. One imputation pass over the columns,
// then an independent per-row decision; output order matches input order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

// Hexagonal Imports
use crate::domain::imputation::{ImputationReport, impute};
use crate::domain::potability::decide_batch;
use crate::domain::sample::{FEATURE_COLUMNS, WaterSample};
use crate::domain::verdict::Verdict;
use crate::error::AquaGuardError;
use crate::infrastructure::adapters::datafusion::feature_columns;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::classifier::Classifier;
use crate::ports::table::TableStore;

use datafusion::arrow::array::{ArrayRef, Float64Array, StringArray};
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::arrow::record_batch::RecordBatch;

/// One scored row, in input order. Carries the post-imputation readings.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRow {
    #[serde(flatten)]
    pub sample: WaterSample,
    pub verdict: Verdict,
}

/// Outcome of one batch run, for the CLI summary and the optional JSON
/// report. Nothing here is persisted by the core.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u128,
    pub total: usize,
    pub safe: usize,
    pub not_safe: usize,
    pub imputation: ImputationReport,
    pub rows: Vec<ScoredRow>,
}

/// Reads `input`, enforces the nine-column contract, imputes per-column
/// medians, decides every row, and writes the table back to `output` with an
/// appended `Prediction` column. Extra input columns are preserved; the nine
/// feature columns are written post-imputation, as the original pipeline did.
///
/// Every failure in here is recoverable from the caller's point of view: it
/// aborts this batch only.
#[instrument(skip(store, classifier))]
pub async fn score_batch(
    store: &dyn TableStore,
    classifier: &dyn Classifier,
    input: &Path,
    output: &Path,
) -> Result<BatchReport, AquaGuardError> {
    let started_at = Utc::now();
    let clock = Instant::now();

    // 1. Load + column contract + extraction
    let batch = store.read_table(input).await?;
    let raw = feature_columns(&batch)?;

    // 2. One imputation pass, then independent per-row decisions
    let (samples, imputation) = impute(&raw)?;
    let assessments = decide_batch(&samples, classifier)?;

    // 3. Output table: original columns (features post-imputation) + verdicts
    let verdicts: Vec<Verdict> = assessments.iter().map(|a| a.verdict).collect();
    let scored = with_predictions(&batch, &samples, &verdicts)?;
    store.write_table(&scored, output).await?;

    let safe = assessments
        .iter()
        .filter(|a| a.verdict == Verdict::Safe)
        .count();
    let report = BatchReport {
        started_at,
        duration_ms: clock.elapsed().as_millis(),
        total: samples.len(),
        safe,
        not_safe: samples.len() - safe,
        imputation,
        rows: samples
            .into_iter()
            .zip(&assessments)
            .map(|(sample, a)| ScoredRow {
                sample,
                verdict: a.verdict,
            })
            .collect(),
    };

    info!(
        total = report.total,
        safe = report.safe,
        imputed_cells = report.imputation.total_filled(),
        "batch scored"
    );
    Ok(report)
}

/// Rebuilds the table with imputed feature columns and the appended
/// `Prediction` column. Column order of the input file is kept.
fn with_predictions(
    batch: &RecordBatch,
    samples: &[WaterSample],
    verdicts: &[Verdict],
) -> Result<RecordBatch, AquaGuardError> {
    let schema = batch.schema();
    let mut fields: Vec<Field> = Vec::with_capacity(schema.fields().len() + 1);
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len() + 1);

    for (idx, field) in schema.fields().iter().enumerate() {
        match FEATURE_COLUMNS
            .iter()
            .position(|c| *c == field.name().as_str())
        {
            Some(feature_idx) => {
                let column = Float64Array::from_iter_values(
                    samples.iter().map(|s| s.as_features()[feature_idx]),
                );
                fields.push(Field::new(field.name(), DataType::Float64, false));
                arrays.push(Arc::new(column));
            }
            None => {
                fields.push(field.as_ref().clone());
                arrays.push(batch.column(idx).clone());
            }
        }
    }

    let predictions: StringArray = verdicts.iter().map(|v| Some(v.as_str())).collect();
    fields.push(Field::new("Prediction", DataType::Utf8, false));
    arrays.push(Arc::new(predictions));

    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .map_err(InfrastructureError::Arrow)
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::infrastructure::adapters::datafusion::CsvStore;
    use crate::ports::classifier::{Label, StubClassifier};
    use anyhow::Result;
    use datafusion::arrow::array::Array;

    const FULL_HEADER: &str =
        "ph,Hardness,Solids,Chloramines,Sulfate,Conductivity,Organic_carbon,Trihalomethanes,Turbidity";

    const SAFE_ROW: &str = "7.0,180,15000,7.5,330,500,10,70,3";
    const ACID_ROW: &str = "2.0,180,15000,7.5,330,500,10,70,3"; // ph outside ideal range

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn prediction_column(batch: &RecordBatch) -> Vec<String> {
        let (idx, _) = batch.schema().column_with_name("Prediction").unwrap();
        let arr = batch
            .column(idx)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap()
            .clone();
        (0..arr.len()).map(|i| arr.value(i).to_string()).collect()
    }

    #[tokio::test]
    async fn test_score_preserves_order_and_appends_predictions() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = write_csv(
            &dir,
            "in.csv",
            &format!("{FULL_HEADER}\n{SAFE_ROW}\n{ACID_ROW}\n{SAFE_ROW}\n"),
        );
        let output = dir.path().join("out.csv");

        let store = CsvStore::new();
        let report = score_batch(
            &store,
            &StubClassifier(Label::NotPotable),
            &input,
            &output,
        )
        .await?;

        assert_eq!(report.total, 3);
        assert_eq!(report.safe, 2);
        assert_eq!(report.not_safe, 1);
        let verdicts: Vec<Verdict> = report.rows.iter().map(|r| r.verdict).collect();
        assert_eq!(verdicts, vec![Verdict::Safe, Verdict::NotSafe, Verdict::Safe]);

        // The written file carries the literal Prediction strings, in order
        let reread = store.read_table(&output).await?;
        assert_eq!(prediction_column(&reread), vec!["Safe", "Not Safe", "Safe"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_model_positive_promotes_out_of_range_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = write_csv(&dir, "in.csv", &format!("{FULL_HEADER}\n{ACID_ROW}\n"));
        let output = dir.path().join("out.csv");

        let store = CsvStore::new();
        let report =
            score_batch(&store, &StubClassifier(Label::Potable), &input, &output).await?;
        assert_eq!(report.rows[0].verdict, Verdict::Safe);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_cell_imputed_with_batch_median() -> Result<()> {
        let dir = tempfile::tempdir()?;
        // Sulfate: 300 / missing / 360 → the hole gets the median 330
        let input = write_csv(
            &dir,
            "in.csv",
            &format!(
                "{FULL_HEADER}\n\
                 7.0,180,15000,7.5,300,500,10,70,3\n\
                 7.0,180,15000,7.5,,500,10,70,3\n\
                 7.0,180,15000,7.5,360,500,10,70,3\n"
            ),
        );
        let output = dir.path().join("out.csv");

        let store = CsvStore::new();
        let report = score_batch(
            &store,
            &StubClassifier(Label::NotPotable),
            &input,
            &output,
        )
        .await?;

        assert_eq!(report.rows[1].sample.sulfate, 330.0);
        assert_eq!(
            report.imputation.filled,
            vec![("Sulfate".to_string(), 330.0, 1)]
        );

        // Imputed value flows into the output file
        let reread = store.read_table(&output).await?;
        let raw = feature_columns(&reread)?;
        assert_eq!(raw.columns[4][1], Some(330.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_columns_abort_without_partial_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = write_csv(&dir, "in.csv", "ph,Hardness\n7.0,180\n");
        let output = dir.path().join("out.csv");

        let store = CsvStore::new();
        let err = score_batch(
            &store,
            &StubClassifier(Label::Potable),
            &input,
            &output,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AquaGuardError::Domain(DomainError::MissingColumns(_))
        ));
        assert!(!output.exists(), "no partial scoring on contract failure");
        Ok(())
    }

    #[tokio::test]
    async fn test_all_null_column_is_reported_not_nan() -> Result<()> {
        let dir = tempfile::tempdir()?;
        // Sulfate column present but empty in every row
        let input = write_csv(
            &dir,
            "in.csv",
            &format!(
                "{FULL_HEADER}\n\
                 7.0,180,15000,7.5,,500,10,70,3\n\
                 7.0,180,15000,7.5,,500,10,70,3\n"
            ),
        );
        let output = dir.path().join("out.csv");

        let store = CsvStore::new();
        let err = score_batch(
            &store,
            &StubClassifier(Label::Potable),
            &input,
            &output,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AquaGuardError::Domain(DomainError::NoComputableMedian(col)) if col == "Sulfate"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_extra_columns_are_preserved() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = write_csv(
            &dir,
            "in.csv",
            &format!("SampleId,{FULL_HEADER}\nwell-12,{SAFE_ROW}\n"),
        );
        let output = dir.path().join("out.csv");

        let store = CsvStore::new();
        score_batch(
            &store,
            &StubClassifier(Label::NotPotable),
            &input,
            &output,
        )
        .await?;

        let reread = store.read_table(&output).await?;
        assert!(reread.schema().column_with_name("SampleId").is_some());
        assert!(reread.schema().column_with_name("Prediction").is_some());
        // 1 extra + 9 features + Prediction
        assert_eq!(reread.num_columns(), 11);
        Ok(())
    }
}
