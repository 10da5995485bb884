use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Column {name} has {got} rows (table has {expected})")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("Missing value in column {column} at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Non-numeric value {value:?} in column {column} at row {row}")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
}
