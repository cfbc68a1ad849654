// aquaguard-core/src/domain/imputation.rs
//
// Per-column median imputation over one batch. The median is computed once
// per column, per batch — never per record, never across batches.

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::sample::{FEATURE_COLUMNS, WaterSample};

/// The nine feature columns of one batch, before imputation. `None` marks a
/// missing cell (empty field, null, or a non-finite parse).
#[derive(Debug, Clone)]
pub struct RawBatch {
    /// Indexed like [`FEATURE_COLUMNS`]; every column has the same length.
    pub columns: [Vec<Option<f64>>; 9],
}

impl RawBatch {
    pub fn rows(&self) -> usize {
        self.columns[0].len()
    }
}

/// What the imputation pass did, for the batch report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ImputationReport {
    /// (column name, median used, cells filled) — only columns that actually
    /// had missing cells.
    pub filled: Vec<(String, f64, usize)>,
}

impl ImputationReport {
    pub fn total_filled(&self) -> usize {
        self.filled.iter().map(|(_, _, n)| n).sum()
    }
}

/// Median of the defined values: midpoint average for even counts, the value
/// itself for odd counts. `None` when no value is defined.
fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut defined: Vec<f64> = values.iter().flatten().copied().collect();
    if defined.is_empty() {
        return None;
    }
    defined.sort_by(|a, b| a.total_cmp(b));
    let mid = defined.len() / 2;
    if defined.len() % 2 == 1 {
        Some(defined[mid])
    } else {
        Some((defined[mid - 1] + defined[mid]) / 2.0)
    }
}

/// Fills every missing cell with its column median and materializes the rows.
///
/// A column with no defined value at all has no median; that surfaces as a
/// reported, per-batch error rather than a NaN flowing into a verdict.
pub fn impute(batch: &RawBatch) -> Result<(Vec<WaterSample>, ImputationReport), DomainError> {
    let rows = batch.rows();
    if rows == 0 {
        return Err(DomainError::EmptyBatch);
    }

    let mut filled_columns: Vec<Vec<f64>> = Vec::with_capacity(9);
    let mut report = ImputationReport { filled: Vec::new() };

    for (column, values) in FEATURE_COLUMNS.iter().zip(&batch.columns) {
        let missing = values.iter().filter(|v| v.is_none()).count();
        if missing == 0 {
            filled_columns.push(values.iter().flatten().copied().collect());
            continue;
        }
        let med = median(values)
            .ok_or_else(|| DomainError::NoComputableMedian(column.to_string()))?;
        debug!(column, median = med, missing, "imputing missing cells");
        filled_columns.push(values.iter().map(|v| v.unwrap_or(med)).collect());
        report.filled.push((column.to_string(), med, missing));
    }

    let samples = (0..rows)
        .map(|i| WaterSample {
            ph: filled_columns[0][i],
            hardness: filled_columns[1][i],
            solids: filled_columns[2][i],
            chloramines: filled_columns[3][i],
            sulfate: filled_columns[4][i],
            conductivity: filled_columns[5][i],
            organic_carbon: filled_columns[6][i],
            trihalomethanes: filled_columns[7][i],
            turbidity: filled_columns[8][i],
        })
        .collect();

    Ok((samples, report))
}
