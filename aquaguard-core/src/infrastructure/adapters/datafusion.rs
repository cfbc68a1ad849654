// aquaguard-core/src/infrastructure/adapters/datafusion.rs

use async_trait::async_trait;
use datafusion::prelude::*;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

// Hexagonal Imports
use crate::domain::error::DomainError;
use crate::domain::imputation::RawBatch;
use crate::domain::sample::FEATURE_COLUMNS;
use crate::error::AquaGuardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::table::TableStore;

use datafusion::arrow::array::{Array, Float64Array, Int64Array};
use datafusion::arrow::compute::concat_batches;
use datafusion::arrow::csv::WriterBuilder;
use datafusion::arrow::datatypes::{DataType, Schema};
use datafusion::arrow::record_batch::RecordBatch;

/// CSV-backed [`TableStore`] on top of a DataFusion session. Schema inference
/// is left to the engine: numeric columns come back as Float64/Int64 with
/// nulls for empty cells, an entirely empty column comes back as Null.
pub struct CsvStore {
    ctx: Arc<SessionContext>,
}

impl CsvStore {
    pub fn new() -> Self {
        Self {
            ctx: Arc::new(SessionContext::new()),
        }
    }
}

impl Default for CsvStore {
    fn default() -> Self {
        Self::new()
    }
}

fn path_str(path: &Path) -> Result<&str, AquaGuardError> {
    path.to_str().ok_or_else(|| {
        AquaGuardError::InternalError(format!("non UTF-8 path: {}", path.display()))
    })
}

#[async_trait]
impl TableStore for CsvStore {
    #[instrument(skip(self))]
    async fn read_table(&self, path: &Path) -> Result<RecordBatch, AquaGuardError> {
        if !path.exists() {
            return Err(InfrastructureError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("batch file not found at '{}'", path.display()),
            ))
            .into());
        }

        let df = self
            .ctx
            .read_csv(path_str(path)?, CsvReadOptions::new())
            .await
            .map_err(InfrastructureError::Engine)?;

        let schema = Arc::new(Schema::from(df.schema().clone()));
        let batches = df.collect().await.map_err(InfrastructureError::Engine)?;
        debug!(batches = batches.len(), "collected CSV partitions");

        if batches.is_empty() {
            return Ok(RecordBatch::new_empty(schema));
        }
        concat_batches(&schema, &batches)
            .map_err(InfrastructureError::Arrow)
            .map_err(Into::into)
    }

    #[instrument(skip(self, batch))]
    async fn write_table(
        &self,
        batch: &RecordBatch,
        path: &Path,
    ) -> Result<(), AquaGuardError> {
        let file = std::fs::File::create(path).map_err(InfrastructureError::Io)?;
        let mut writer = WriterBuilder::new()
            .with_header(true)
            .build(BufWriter::new(file));
        writer.write(batch).map_err(InfrastructureError::Arrow)?;
        // Dropping the writer would swallow a flush failure
        writer.into_inner().flush().map_err(InfrastructureError::Io)?;
        Ok(())
    }
}

/// Pulls the nine feature columns out of a batch, enforcing the header
/// contract: all canonical names present (case-sensitive, order-independent),
/// extra columns ignored here and preserved by the caller.
///
/// Missing cells and non-finite values both map to `None` — the imputation
/// pass treats them alike, as the original pipeline did with NaN.
pub fn feature_columns(batch: &RecordBatch) -> Result<RawBatch, AquaGuardError> {
    let schema = batch.schema();

    let missing: Vec<String> = FEATURE_COLUMNS
        .iter()
        .filter(|name| schema.column_with_name(name).is_none())
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DomainError::MissingColumns(missing).into());
    }

    let rows = batch.num_rows();
    let mut columns: [Vec<Option<f64>>; 9] = Default::default();

    for (slot, name) in columns.iter_mut().zip(FEATURE_COLUMNS) {
        // Presence was checked above
        let (idx, field) = schema
            .column_with_name(name)
            .ok_or_else(|| AquaGuardError::InternalError(format!("column '{name}' vanished")))?;
        let array = batch.column(idx);

        *slot = match field.data_type() {
            DataType::Float64 => {
                let arr = downcast::<Float64Array>(array, name, field.data_type())?;
                (0..rows)
                    .map(|i| {
                        if arr.is_null(i) {
                            None
                        } else {
                            Some(arr.value(i)).filter(|v| v.is_finite())
                        }
                    })
                    .collect()
            }
            DataType::Int64 => {
                let arr = downcast::<Int64Array>(array, name, field.data_type())?;
                (0..rows)
                    .map(|i| (!arr.is_null(i)).then(|| arr.value(i) as f64))
                    .collect()
            }
            // Entirely empty column: every cell is missing
            DataType::Null => vec![None; rows],
            other => {
                return Err(DomainError::NonNumericColumn {
                    column: name.to_string(),
                    data_type: other.to_string(),
                }
                .into());
            }
        };
    }

    Ok(RawBatch { columns })
}

fn downcast<'a, T: 'static>(
    array: &'a dyn Array,
    name: &str,
    data_type: &DataType,
) -> Result<&'a T, AquaGuardError> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        AquaGuardError::InternalError(format!(
            "column '{name}' declared {data_type} but the array does not match"
        ))
    })
}
