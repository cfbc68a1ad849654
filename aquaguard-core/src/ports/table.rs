// aquaguard-core/src/ports/table.rs

// Abstraction over the tabular file surface: how a batch CSV is read and how
// the scored table is written back. Speaks Arrow record batches, like the
// engine underneath — the port hides the engine, not the data model.

use crate::error::AquaGuardError;
use async_trait::async_trait;
use datafusion::arrow::record_batch::RecordBatch;
use std::path::Path;

#[async_trait]
pub trait TableStore: Send + Sync {
    /// Reads a tabular file into a single record batch (header row expected).
    async fn read_table(&self, path: &Path) -> Result<RecordBatch, AquaGuardError>;

    /// Writes a record batch as a tabular file with a header row.
    async fn write_table(&self, batch: &RecordBatch, path: &Path)
    -> Result<(), AquaGuardError>;
}
