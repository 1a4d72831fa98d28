use thiserror::Error;

/// A seed file row that cannot be turned into a record.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("{file}: row {row} has no column {column}")]
    MissingField {
        file: String,
        row: usize,
        column: usize,
    },

    #[error("{file}: row {row} column {column} has invalid value {value:?}")]
    InvalidField {
        file: String,
        row: usize,
        column: usize,
        value: String,
    },
}
