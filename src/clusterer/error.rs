use crate::table::TableError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ClusterError {
    #[error("No rows to cluster")]
    EmptyInput,

    #[error("No feature columns selected")]
    NoFeatures,

    #[error("Row {row} has {got} features (expected {expected})")]
    RaggedInput {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Non-finite feature value at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },

    #[error("Map expects {expected} features per vector, got {got}")]
    InputLengthMismatch { expected: usize, got: usize },

    #[error("Invalid map grid: {rows}x{cols}")]
    InvalidGrid { rows: usize, cols: usize },

    #[error("Training needs at least one iteration")]
    NoIterations,

    #[error(transparent)]
    Table(#[from] TableError),
}
