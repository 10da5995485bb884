use crate::table::TableError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MapError {
    #[error("Color column {column} has {distinct} distinct values but only {colors} colors were given")]
    PaletteTooSmall {
        column: String,
        distinct: usize,
        colors: usize,
    },

    #[error("marker has uniques > {palette} (column {column} has {distinct})")]
    MarkerCardinality {
        column: String,
        distinct: usize,
        palette: usize,
    },

    #[error("Unknown tiles: {0}")]
    UnknownTiles(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
