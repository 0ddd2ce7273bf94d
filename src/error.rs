use thiserror::Error;

/// Convenience result type for ingestion and validation.
pub type TaxiParkResult<T> = Result<T, TaxiParkError>;

/// Error type returned by the fallible parts of the crate.
///
/// Queries over a [`crate::types::TaxiPark`] never fail; only loading and validating one can.
#[derive(Debug, Error)]
pub enum TaxiParkError {
    /// Underlying I/O error raised by a reader.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (missing columns, empty input, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required field type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A well-formed park breaks one of the data model invariants.
    #[error("invalid taxi park: {message}")]
    Validation { message: String },
}
