use crate::table::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read hospital data from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed hospital CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("No hospitals found for state: {0}")]
    UnknownState(String),

    #[error("No hospitals with complete data for state: {0}")]
    NoCompleteRows(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
