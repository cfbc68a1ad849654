// aquaguard-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Batch file is missing required columns: [{}]", .0.join(", "))]
    #[diagnostic(
        code(aquaguard::domain::missing_columns),
        help("The header must contain the nine canonical columns (case-sensitive): ph, Hardness, Solids, Chloramines, Sulfate, Conductivity, Organic_carbon, Trihalomethanes, Turbidity.")
    )]
    MissingColumns(Vec<String>),

    #[error("Column '{0}' has no computable median (every value is missing)")]
    #[diagnostic(
        code(aquaguard::domain::no_median),
        help("At least one row must carry a value so missing cells can be imputed.")
    )]
    NoComputableMedian(String),

    #[error("Column '{column}' is not numeric (found {data_type})")]
    #[diagnostic(code(aquaguard::domain::non_numeric_column))]
    NonNumericColumn { column: String, data_type: String },

    #[error("Batch file contains no data rows")]
    #[diagnostic(code(aquaguard::domain::empty_batch))]
    EmptyBatch,

    #[error("Measurement outside the accepted input domain: [{}]", .0.join(", "))]
    #[diagnostic(
        code(aquaguard::domain::out_of_domain),
        help("Input bounds (e.g. ph in [0, 14]) cap what the instruments can report; values beyond them are read errors, not water quality findings.")
    )]
    OutOfDomain(Vec<String>),
}
