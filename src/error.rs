use std::io;

use arrow_schema::ArrowError;
use datafusion::error::DataFusionError;
use parquet::errors::ParquetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] ParquetError),

    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("query error: {0}")]
    Query(#[from] DataFusionError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected schema: {0}")]
    SchemaMismatch(String),

    #[error("expected {expected} rows, found {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("value {value} at row {index} is outside [{min}, {max}]")]
    OutOfBand {
        index: usize,
        value: i32,
        min: i32,
        max: i32,
    },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
